//! Reference data shared by several forms.
//!
//! Faculties, majors, subjects and books are read-mostly lists that many views
//! need at once. A [`CatalogScope`] fetches each list at most once for its
//! lifetime, so everything rendered for one request shares the same fetches.
//! Scopes are meant to be short-lived; a new scope always re-fetches.

use tokio::sync::OnceCell;

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::{Book, Faculty, Major, Subject};

/// Entry point for scoped reference-data access.
#[derive(Debug, Clone)]
pub struct Catalog {
    api: ApiClient,
}

impl Catalog {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Start a new request scope with empty caches.
    pub fn scope(&self) -> CatalogScope<'_> {
        CatalogScope {
            api: &self.api,
            faculties: OnceCell::new(),
            majors: OnceCell::new(),
            subjects: OnceCell::new(),
            books: OnceCell::new(),
        }
    }
}

/// Request-scoped cache over the reference lists.
pub struct CatalogScope<'a> {
    api: &'a ApiClient,
    faculties: OnceCell<Vec<Faculty>>,
    majors: OnceCell<Vec<Major>>,
    subjects: OnceCell<Vec<Subject>>,
    books: OnceCell<Vec<Book>>,
}

/// All reference lists, borrowed from a scope.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceData<'s> {
    pub faculties: &'s [Faculty],
    pub majors: &'s [Major],
    pub subjects: &'s [Subject],
    pub books: &'s [Book],
}

impl CatalogScope<'_> {
    pub async fn faculties(&self) -> Result<&[Faculty], AppError> {
        let api = self.api;
        let list = self
            .faculties
            .get_or_try_init(move || async move { api.faculties().list_all().await })
            .await?;
        Ok(list.as_slice())
    }

    pub async fn majors(&self) -> Result<&[Major], AppError> {
        let api = self.api;
        let list = self
            .majors
            .get_or_try_init(move || async move { api.majors().list_all().await })
            .await?;
        Ok(list.as_slice())
    }

    pub async fn subjects(&self) -> Result<&[Subject], AppError> {
        let api = self.api;
        let list = self
            .subjects
            .get_or_try_init(move || async move { api.subjects().list_all().await })
            .await?;
        Ok(list.as_slice())
    }

    pub async fn books(&self) -> Result<&[Book], AppError> {
        let api = self.api;
        let list = self
            .books
            .get_or_try_init(move || async move { api.books().list_all().await })
            .await?;
        Ok(list.as_slice())
    }

    /// Fetch every list not cached yet, concurrently. Fails on the first error.
    pub async fn load_all(&self) -> Result<ReferenceData<'_>, AppError> {
        let (faculties, majors, subjects, books) =
            tokio::try_join!(self.faculties(), self.majors(), self.subjects(), self.books())?;
        tracing::debug!(
            "Reference data: {} faculties, {} majors, {} subjects, {} books",
            faculties.len(),
            majors.len(),
            subjects.len(),
            books.len()
        );
        Ok(ReferenceData {
            faculties,
            majors,
            subjects,
            books,
        })
    }
}
