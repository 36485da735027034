/// One row of the events listing, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub location: String,
    pub time: String,
}

impl EventRecord {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            time: time.into(),
        }
    }
}
