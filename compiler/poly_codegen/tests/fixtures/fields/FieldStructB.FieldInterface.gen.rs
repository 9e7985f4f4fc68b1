// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&FieldInterface> for FieldStructB {
    fn from(s: &FieldInterface) -> Self {
        Self {
            int: s.i32_0,
        }
    }
}

impl FieldStructB {
    pub fn write_to_field_interface(&self, s: &mut FieldInterface) {
        s.current_type_id = FieldInterfaceTypeId::FieldStructB;
        s.i32_0 = self.int;
    }

    pub fn to_field_interface(&self) -> FieldInterface {
        let mut s = FieldInterface::default();
        self.write_to_field_interface(&mut s);
        s
    }
}
