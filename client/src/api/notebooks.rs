use wenote_core::{Notebook, NotebookList, NotebookName};

use crate::{error::Result, http::ApiClient};

impl ApiClient {
    pub async fn list_notebooks(&self) -> Result<NotebookList> {
        self.get("/notebooks").await
    }

    /// The notebook new notes land in when none is given.
    pub async fn default_notebook(&self) -> Result<Notebook> {
        self.get("/notebooks/default").await
    }

    pub async fn get_notebook(&self, id: u64) -> Result<Notebook> {
        self.get(&format!("/notebooks/{}", id)).await
    }

    pub async fn create_notebook(&self, name: &str) -> Result<Notebook> {
        self.post(
            "/notebooks",
            &NotebookName {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn update_notebook(&self, id: u64, name: &str) -> Result<Notebook> {
        self.patch(
            &format!("/notebooks/{}", id),
            &NotebookName {
                name: name.to_string(),
            },
        )
        .await
    }

    /// The server moves the notebook's notes to the default notebook.
    pub async fn delete_notebook(&self, id: u64) -> Result<()> {
        self.delete(&format!("/notebooks/{}", id)).await
    }
}
