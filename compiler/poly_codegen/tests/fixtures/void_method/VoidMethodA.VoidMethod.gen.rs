// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&VoidMethod> for VoidMethodA {
    fn from(s: &VoidMethod) -> Self {
        Self {
            a: s.i32_0,
        }
    }
}

impl VoidMethodA {
    pub fn write_to_void_method(&self, s: &mut VoidMethod) {
        s.current_type_id = VoidMethodTypeId::VoidMethodA;
        s.i32_0 = self.a;
    }

    pub fn to_void_method(&self) -> VoidMethod {
        let mut s = VoidMethod::default();
        self.write_to_void_method(&mut s);
        s
    }
}
