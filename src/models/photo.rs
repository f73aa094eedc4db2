use serde::{Deserialize, Serialize};

/// A photo row. Belongs to exactly one user.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub comment: Option<String>,
    pub user_id: i64,
}

/// Insert payload: validated fields with the requester's `user_id` attached.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPhoto {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub user_id: i64,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhotoChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
}

impl PhotoChanges {
    pub fn apply(&self, photo: &mut Photo) {
        if let Some(title) = &self.title {
            photo.title = title.clone();
        }
        if let Some(url) = &self.url {
            photo.url = url.clone();
        }
        if let Some(comment) = &self.comment {
            photo.comment = Some(comment.clone());
        }
    }
}
