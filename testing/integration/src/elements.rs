use strum::EnumMessage;

///
/// TestElements
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TestElements {
    None,
    Element1,
    Element2,
    Element3,
}

///
/// Status
///
/// Lifecycle of an order.
///

#[derive(Clone, Copy, Debug, Default, EnumMessage, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Status {
    #[default]
    Unknown = 0,

    /// Waiting to be picked up.
    Pending = 1,

    #[strum(message = "Currently in progress")]
    InProgress = 2,

    //// Finished successfully.
    Done = 3,

    // no description, falls back to the name
    Cancelled = 4,
}

pub mod priority {

    ///
    /// Priority
    ///

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    #[repr(i64)]
    pub enum Priority {
        Low = -1,
        Normal = 0,
        High = 10,
    }
}
