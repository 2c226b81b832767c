//! Sub-collections attached to one entity: files, images, publications,
//! bank accounts and notes.

use uuid::Uuid;

use super::{meta_refs, HasEndpoint};
use crate::rest::resources::common::{
    AgentAccount, DeleteManyResult, File, HasMeta, Image, List, MetaArray, Note, Publication,
};
use crate::rest::{Params, ResourceError, ResourcePath, ResourceResponse};

fn sub_path(endpoint: &crate::rest::Endpoint, id: Uuid, sub: &str) -> ResourcePath {
    endpoint.path().id(id).segment(sub)
}

/// `{uri}/{id}/files`
#[allow(async_fn_in_trait)]
pub trait Files: HasEndpoint {
    /// Lists files attached to an entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_files(&self, id: Uuid) -> Result<ResourceResponse<MetaArray<File>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "files")).get().await
    }

    /// Attaches one file and returns the resulting file list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_file(
        &self,
        id: Uuid,
        file: &File,
    ) -> Result<ResourceResponse<Vec<File>>, ResourceError> {
        self.update_files(id, std::slice::from_ref(file)).await
    }

    /// Attaches or updates several files.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_files(
        &self,
        id: Uuid,
        files: &[File],
    ) -> Result<ResourceResponse<Vec<File>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "files")).post(files).await
    }

    /// Detaches one file.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_file(&self, id: Uuid, file_id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "files").id(file_id);
        endpoint.request(path).delete().await
    }

    /// Detaches several files.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if a file has no meta.
    async fn delete_files(
        &self,
        id: Uuid,
        files: &[File],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let refs = meta_refs(files, "File")?;
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "files").segment("delete");
        endpoint.request(path).post(&refs).await
    }
}

/// `{uri}/{id}/images`
#[allow(async_fn_in_trait)]
pub trait Images: HasEndpoint {
    /// Lists images of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_images(&self, id: Uuid) -> Result<ResourceResponse<MetaArray<Image>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "images")).get().await
    }

    /// Adds one image and returns the resulting image list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_image(
        &self,
        id: Uuid,
        image: &Image,
    ) -> Result<ResourceResponse<Vec<Image>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "images")).post(image).await
    }

    /// Replaces the image set of an entity.
    ///
    /// Images left out of `images` are removed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_images(
        &self,
        id: Uuid,
        images: &[Image],
    ) -> Result<ResourceResponse<Vec<Image>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "images")).post(images).await
    }

    /// Removes one image.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_image(&self, id: Uuid, image_id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "images").id(image_id);
        endpoint.request(path).delete().await
    }

    /// Removes several images.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentity`] if an image has no meta.
    async fn delete_images(
        &self,
        id: Uuid,
        images: &[Image],
    ) -> Result<ResourceResponse<Vec<DeleteManyResult>>, ResourceError> {
        let refs = meta_refs(images, "Image")?;
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "images").segment("delete");
        endpoint.request(path).post(&refs).await
    }
}

/// `{uri}/{id}/publication`
#[allow(async_fn_in_trait)]
pub trait Publications: HasEndpoint {
    /// Lists publications of a document.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_publications(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<MetaArray<Publication>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "publication")).get().await
    }

    /// Fetches one publication.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_publication_by_id(
        &self,
        id: Uuid,
        publication_id: Uuid,
    ) -> Result<ResourceResponse<Publication>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "publication").id(publication_id);
        endpoint.request(path).get().await
    }

    /// Publishes a document with a print template.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn publish<T: HasMeta + Sync>(
        &self,
        id: Uuid,
        template: &T,
    ) -> Result<ResourceResponse<Publication>, ResourceError> {
        let publication = Publication::with_template(template);
        let endpoint = self.endpoint();
        endpoint
            .request(sub_path(endpoint, id, "publication"))
            .post(&publication)
            .await
    }

    /// Deletes a publication.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_publication(
        &self,
        id: Uuid,
        publication_id: Uuid,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "publication").id(publication_id);
        endpoint.request(path).delete().await
    }
}

/// `{uri}/{id}/accounts`
#[allow(async_fn_in_trait)]
pub trait Accounts: HasEndpoint {
    /// Lists bank accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_accounts(
        &self,
        id: Uuid,
    ) -> Result<ResourceResponse<List<AgentAccount>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "accounts")).get().await
    }

    /// Fetches one bank account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_account_by_id(
        &self,
        id: Uuid,
        account_id: Uuid,
    ) -> Result<ResourceResponse<AgentAccount>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "accounts").id(account_id);
        endpoint.request(path).get().await
    }

    /// Replaces the account set.
    ///
    /// Accounts with a meta are updated, those without are created, and
    /// accounts left out are removed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_accounts(
        &self,
        id: Uuid,
        accounts: &[AgentAccount],
    ) -> Result<ResourceResponse<MetaArray<AgentAccount>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(sub_path(endpoint, id, "accounts"))
            .post(accounts)
            .await
    }
}

/// `{uri}/{id}/notes`
#[allow(async_fn_in_trait)]
pub trait Notes: HasEndpoint {
    /// Lists notes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_notes(
        &self,
        id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<Note>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint
            .request(sub_path(endpoint, id, "notes"))
            .params(params)
            .get()
            .await
    }

    /// Fetches one note.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    async fn get_note_by_id(
        &self,
        id: Uuid,
        note_id: Uuid,
    ) -> Result<ResourceResponse<Note>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "notes").id(note_id);
        endpoint.request(path).get().await
    }

    /// Adds a note.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_note(&self, id: Uuid, note: &Note) -> Result<ResourceResponse<Note>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "notes")).post(note).await
    }

    /// Adds several notes in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn create_notes(
        &self,
        id: Uuid,
        notes: &[Note],
    ) -> Result<ResourceResponse<Vec<Note>>, ResourceError> {
        let endpoint = self.endpoint();
        endpoint.request(sub_path(endpoint, id, "notes")).post(notes).await
    }

    /// Edits a note.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encode, transport, API and decode errors.
    async fn update_note(
        &self,
        id: Uuid,
        note_id: Uuid,
        note: &Note,
    ) -> Result<ResourceResponse<Note>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "notes").id(note_id);
        endpoint.request(path).put(note).await
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer is an error.
    async fn delete_note(&self, id: Uuid, note_id: Uuid) -> Result<ResourceResponse<bool>, ResourceError> {
        let endpoint = self.endpoint();
        let path = sub_path(endpoint, id, "notes").id(note_id);
        endpoint.request(path).delete().await
    }
}
