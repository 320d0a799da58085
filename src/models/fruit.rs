use crate::models::season::Season;
use crate::stream::type_descriptor::TypeDescriptor;

// Not serializable and no zero-argument constructor. Any serializable type
// that lists this descriptor as its ancestor cannot be deserialized.
pub static FRUIT_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Fruit",
    serializable: false,
    has_no_arg_constructor: false,
    ancestor: None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    ripe: Season,
}

impl Fruit {
    pub fn new(ripe: Season) -> Self {
        Self { ripe }
    }

    pub fn ripe(&self) -> Season {
        self.ripe
    }
}
