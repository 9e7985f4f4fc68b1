// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&ParameterMethod> for ParameterMethodA {
    fn from(_s: &ParameterMethod) -> Self {
        Self {
        }
    }
}

impl ParameterMethodA {
    pub fn write_to_parameter_method(&self, s: &mut ParameterMethod) {
        s.current_type_id = ParameterMethodTypeId::ParameterMethodA;
    }

    pub fn to_parameter_method(&self) -> ParameterMethod {
        let mut s = ParameterMethod::default();
        self.write_to_parameter_method(&mut s);
        s
    }
}
