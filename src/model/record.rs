use serde::{Deserialize, Serialize};

/// One row of the precomputed score table. Scores are trusted as given;
/// `combo_score` is documented upstream as the average of the other two
/// but is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub team_name: String,
    pub teammate: String,
    pub team_score: f32,
    pub driver_score: f32,
    pub combo_score: f32,
    pub team_image_url: String,
    pub driver_image_url: String,
}

impl ScoreRecord {
    pub fn combo_label(&self) -> String {
        format!("{} + {}", self.team_name, self.teammate)
    }
}
