pub mod arithmetic;
pub mod collections;
pub mod control_flow;
pub mod functions;
pub mod objects;

use crate::domain::ports::Question;

/// The five menu categories, in menu order.
pub fn catalog() -> [Box<dyn Question>; 5] {
    [
        Box::new(arithmetic::Basics),
        Box::new(control_flow::ControlFlow),
        Box::new(collections::Collections),
        Box::new(functions::Functions),
        Box::new(objects::Objects),
    ]
}
