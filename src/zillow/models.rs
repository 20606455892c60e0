/// Address parameters for a deep-search lookup.
#[derive(Debug, Clone)]
pub struct DeepSearchParams {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// When set, the search also asks for a rent estimate.
    pub rentzestimate: bool,
}

impl DeepSearchParams {
    /// The combined "city, state zip" string the web service expects.
    pub fn citystatezip(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}
