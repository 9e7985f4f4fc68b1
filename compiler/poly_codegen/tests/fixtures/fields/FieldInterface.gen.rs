// *** GENERATED CODE: ANY EDITS WILL BE LOST ***

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldInterfaceTypeId(pub u32);

#[allow(non_upper_case_globals)]
impl FieldInterfaceTypeId {
    pub const FieldStructA: Self = Self(0);
    pub const FieldStructB: Self = Self(1);
    pub const FieldStructC: Self = Self(2);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldInterface {
    pub current_type_id: FieldInterfaceTypeId,
    pub i32_0: i32,
    pub i32_1: i32,
    pub bool_2: bool,
}

impl IFieldInterface for FieldInterface {
}
