// Domain layer: transient records and the ports (traits) the menu and the
// data-access patterns are written against.

pub mod model;
pub mod ports;
