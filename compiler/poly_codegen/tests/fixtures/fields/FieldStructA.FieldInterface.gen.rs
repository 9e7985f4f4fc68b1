// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&FieldInterface> for FieldStructA {
    fn from(s: &FieldInterface) -> Self {
        Self {
            int1: s.i32_0,
            int2: s.i32_1,
        }
    }
}

impl FieldStructA {
    pub fn write_to_field_interface(&self, s: &mut FieldInterface) {
        s.current_type_id = FieldInterfaceTypeId::FieldStructA;
        s.i32_0 = self.int1;
        s.i32_1 = self.int2;
    }

    pub fn to_field_interface(&self) -> FieldInterface {
        let mut s = FieldInterface::default();
        self.write_to_field_interface(&mut s);
        s
    }
}
