use crate::metadata::{method::MethodFlags, typesystem::TypeRef};

/// Represents an event declaration
#[derive(Debug, Clone)]
pub struct EventDescriptor {
    /// The event name
    pub name: String,
    /// The type that declares this event
    pub declaring_type: TypeRef,
    /// The delegate type of the handler
    pub handler_type: TypeRef,
    /// The handler delegate is multicast
    pub is_multicast: bool,
    /// Flags of the `add_` accessor, which drive the event's qualifiers
    pub add_accessor: Option<MethodFlags>,
}

impl EventDescriptor {
    /// Create an event
    ///
    /// ## Arguments
    /// * `name`           - The event name
    /// * `declaring_type` - The type that declares the event
    /// * `handler_type`   - The delegate type
    /// * `add_accessor`   - Flags of the add accessor, if any
    pub fn new(
        name: impl Into<String>,
        declaring_type: TypeRef,
        handler_type: TypeRef,
        add_accessor: Option<MethodFlags>,
    ) -> Self {
        EventDescriptor {
            name: name.into(),
            declaring_type,
            handler_type,
            is_multicast: false,
            add_accessor,
        }
    }

    /// Mark the handler delegate as multicast
    #[must_use]
    pub fn multicast(mut self) -> Self {
        self.is_multicast = true;
        self
    }
}
