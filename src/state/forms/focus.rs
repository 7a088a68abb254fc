//! Focus ring of the time entry form

/// Field of the time entry form that receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormFocus {
    #[default]
    Date,
    Hours,
    Description,
    Activity,
    Submit,
}

impl FormFocus {
    /// Number of focusable fields
    pub const COUNT: usize = 5;

    const ALL: [FormFocus; Self::COUNT] = [
        FormFocus::Date,
        FormFocus::Hours,
        FormFocus::Description,
        FormFocus::Activity,
        FormFocus::Submit,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Next field, wrapping from Submit to Date
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous field, wrapping from Date to Submit
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Hours => "Hours",
            Self::Description => "Description",
            Self::Activity => "Activity",
            Self::Submit => "Submit",
        }
    }
}
