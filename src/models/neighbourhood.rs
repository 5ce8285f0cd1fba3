use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Neighbourhood {
    pub neighbourhood_group: String,
    pub neighbourhood: String,
}
