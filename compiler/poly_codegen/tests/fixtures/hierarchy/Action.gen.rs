// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionTypeId(pub u32);

#[allow(non_upper_case_globals)]
impl ActionTypeId {
    pub const Melee: Self = Self(0);
    pub const Ranged: Self = Self(1);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Action {
    pub current_type_id: ActionTypeId,
    pub i32_0: i32,
    pub f32_1: f32,
}

impl IAction for Action {
    fn perform(&mut self, bonus: i32) -> i32 {
        match self.current_type_id {
            ActionTypeId::Melee => {
                let mut instance = Melee::from(&*self);
                let r = IAction::perform(&mut instance, bonus);
                instance.write_to_action(self);
                r
            }
            ActionTypeId::Ranged => {
                let mut instance = Ranged::from(&*self);
                let r = IAction::perform(&mut instance, bonus);
                instance.write_to_action(self);
                r
            }
            other => panic!("unexpected type id {} for merged type Action", other.0),
        }
    }
}

impl IBase for Action {
    fn id(&self) -> u32 {
        match self.current_type_id {
            ActionTypeId::Melee => {
                let instance = Melee::from(self);
                IBase::id(&instance)
            }
            ActionTypeId::Ranged => {
                let instance = Ranged::from(self);
                IBase::id(&instance)
            }
            other => panic!("unexpected type id {} for merged type Action", other.0),
        }
    }
}
