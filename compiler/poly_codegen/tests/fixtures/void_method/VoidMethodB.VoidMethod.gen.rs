// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&VoidMethod> for VoidMethodB {
    fn from(s: &VoidMethod) -> Self {
        Self {
            b: s.i32_0,
        }
    }
}

impl VoidMethodB {
    pub fn write_to_void_method(&self, s: &mut VoidMethod) {
        s.current_type_id = VoidMethodTypeId::VoidMethodB;
        s.i32_0 = self.b;
    }

    pub fn to_void_method(&self) -> VoidMethod {
        let mut s = VoidMethod::default();
        self.write_to_void_method(&mut s);
        s
    }
}
