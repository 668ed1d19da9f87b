//! User-defined field (UDF) vocabulary shared with the API.

#[cfg(test)]
#[path = "udf_test.rs"]
mod udf_test;

/// Model a UDF can be attached to, with its server-side class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UdfModule {
    Document,
}

impl UdfModule {
    pub const ALL: [Self; 1] = [Self::Document];

    pub fn value(self) -> &'static str {
        match self {
            Self::Document => "App\\Models\\Document",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Document => "Document",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == raw)
    }
}

/// Input type of a UDF; the numeric code is the wire value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UdfType {
    Text,
    Number,
    Dropdown,
    Date,
}

impl UdfType {
    pub const ALL: [Self; 4] = [Self::Text, Self::Number, Self::Dropdown, Self::Date];

    pub fn code(self) -> u8 {
        match self {
            Self::Text => 1,
            Self::Number => 2,
            Self::Dropdown => 3,
            Self::Date => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Dropdown => "Dropdown",
            Self::Date => "Date",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Only dropdowns draw their options from a data source.
    pub fn has_data_source(self) -> bool {
        self == Self::Dropdown
    }
}

/// Where a dropdown UDF's options come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UdfDataSource {
    User,
    Custom,
}

impl UdfDataSource {
    pub const ALL: [Self; 2] = [Self::User, Self::Custom];

    pub fn value(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User List",
            Self::Custom => "Custom List",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == raw)
    }
}

/// Which view of a record shows the UDF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UdfSection {
    List,
    Detail,
}

impl UdfSection {
    pub const ALL: [Self; 2] = [Self::List, Self::Detail];

    pub fn code(self) -> u8 {
        match self {
            Self::List => 1,
            Self::Detail => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Detail => "Detail",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}
