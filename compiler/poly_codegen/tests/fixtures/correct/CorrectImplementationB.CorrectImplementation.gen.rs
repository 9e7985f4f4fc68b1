// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&CorrectImplementation> for CorrectImplementationB {
    fn from(s: &CorrectImplementation) -> Self {
        Self {
            a: s.i32_0,
            b: s.i32_1,
        }
    }
}

impl CorrectImplementationB {
    pub fn write_to_correct_implementation(&self, s: &mut CorrectImplementation) {
        s.current_type_id = CorrectImplementationTypeId::CorrectImplementationB;
        s.i32_0 = self.a;
        s.i32_1 = self.b;
    }

    pub fn to_correct_implementation(&self) -> CorrectImplementation {
        let mut s = CorrectImplementation::default();
        self.write_to_correct_implementation(&mut s);
        s
    }
}
