// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&Action> for Melee {
    fn from(s: &Action) -> Self {
        Self {
            power: s.i32_0,
        }
    }
}

impl Melee {
    pub fn write_to_action(&self, s: &mut Action) {
        s.current_type_id = ActionTypeId::Melee;
        s.i32_0 = self.power;
    }

    pub fn to_action(&self) -> Action {
        let mut s = Action::default();
        self.write_to_action(&mut s);
        s
    }
}
