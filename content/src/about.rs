use serde::{Deserialize, Serialize};

// a headline statistic, e.g. "2500+" students
//
// the value is display text; counters only animate values of the form "<integer>+"
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stat: Option<Stat>,
}
