use wenote_core::{NewTag, Tag, TagList, TagUpdate};

use crate::{error::Result, http::ApiClient};

impl ApiClient {
    pub async fn list_tags(&self) -> Result<TagList> {
        self.get("/tags").await
    }

    pub async fn create_tag(&self, tag: &NewTag) -> Result<Tag> {
        self.post("/tags", tag).await
    }

    pub async fn update_tag(&self, id: u64, update: &TagUpdate) -> Result<Tag> {
        self.patch(&format!("/tags/{}", id), update).await
    }

    pub async fn delete_tag(&self, id: u64) -> Result<()> {
        self.delete(&format!("/tags/{}", id)).await
    }
}
