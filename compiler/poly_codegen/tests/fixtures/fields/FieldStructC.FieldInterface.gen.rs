// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&FieldInterface> for FieldStructC {
    fn from(s: &FieldInterface) -> Self {
        Self {
            flag: s.bool_2,
            int: s.i32_0,
        }
    }
}

impl FieldStructC {
    pub fn write_to_field_interface(&self, s: &mut FieldInterface) {
        s.current_type_id = FieldInterfaceTypeId::FieldStructC;
        s.i32_0 = self.int;
        s.bool_2 = self.flag;
    }

    pub fn to_field_interface(&self) -> FieldInterface {
        let mut s = FieldInterface::default();
        self.write_to_field_interface(&mut s);
        s
    }
}
