// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

impl From<&Action> for Ranged {
    fn from(s: &Action) -> Self {
        Self {
            range: s.f32_1,
            ammo: s.i32_0,
        }
    }
}

impl Ranged {
    pub fn write_to_action(&self, s: &mut Action) {
        s.current_type_id = ActionTypeId::Ranged;
        s.i32_0 = self.ammo;
        s.f32_1 = self.range;
    }

    pub fn to_action(&self) -> Action {
        let mut s = Action::default();
        self.write_to_action(&mut s);
        s
    }
}
