// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VoidMethodTypeId(pub u32);

#[allow(non_upper_case_globals)]
impl VoidMethodTypeId {
    pub const VoidMethodA: Self = Self(0);
    pub const VoidMethodB: Self = Self(1);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoidMethod {
    pub current_type_id: VoidMethodTypeId,
    pub i32_0: i32,
}

impl IVoidMethod for VoidMethod {
    fn foo(&mut self) {
        match self.current_type_id {
            VoidMethodTypeId::VoidMethodA => {
                let mut instance = VoidMethodA::from(&*self);
                IVoidMethod::foo(&mut instance);
                instance.write_to_void_method(self);
            }
            VoidMethodTypeId::VoidMethodB => {
                let mut instance = VoidMethodB::from(&*self);
                IVoidMethod::foo(&mut instance);
                instance.write_to_void_method(self);
            }
            other => panic!("unexpected type id {} for merged type VoidMethod", other.0),
        }
    }
}
