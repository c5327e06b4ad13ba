//! User search use-case.
//!
//! Builds the per-request query value and delegates matching entirely to the
//! engine. Results come back in the engine's relevance order.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserIndex, UserIndexError, UserSearchQuery};
use crate::domain::user::UserDocument;

/// Runs fuzzy multi-field searches against the user index.
#[derive(Clone)]
pub struct UserSearch {
    index: Arc<dyn UserIndex>,
}

impl UserSearch {
    /// Build a searcher over the shared engine port.
    pub fn new(index: Arc<dyn UserIndex>) -> Self {
        Self { index }
    }

    /// Search for users matching `term`, returning the `[from, from + size)`
    /// window of relevance-ranked hits.
    ///
    /// Zero matches is a successful empty result.
    ///
    /// # Errors
    ///
    /// Propagates [`UserIndexError`] when the engine call or the response
    /// decoding fails.
    pub async fn search(
        &self,
        term: &str,
        from: u64,
        size: u64,
    ) -> Result<Vec<UserDocument>, UserIndexError> {
        let query = UserSearchQuery {
            term: term.to_owned(),
            from,
            size,
        };

        let users = self.index.search_users(&query).await?;
        debug!(term, hits = users.len(), "search complete");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    //! Delegation coverage using a mocked engine port.

    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::MockUserIndex;

    fn document(username: &str) -> UserDocument {
        UserDocument {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            real_name: "Jane Doe".to_owned(),
        }
    }

    #[actix_rt::test]
    async fn passes_term_and_window_to_the_port() {
        let mut index = MockUserIndex::new();
        index
            .expect_search_users()
            .with(eq(UserSearchQuery {
                term: "johnd0e".to_owned(),
                from: 0,
                size: 20,
            }))
            .times(1)
            .returning(|_| Ok(vec![document("johndoe")]));

        let users = UserSearch::new(Arc::new(index))
            .search("johnd0e", 0, 20)
            .await
            .expect("search should succeed");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "johndoe");
    }

    #[actix_rt::test]
    async fn empty_result_is_success() {
        let mut index = MockUserIndex::new();
        index
            .expect_search_users()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let users = UserSearch::new(Arc::new(index))
            .search("zzzznonexistentzzzz", 0, 20)
            .await
            .expect("search should succeed");
        assert!(users.is_empty());
    }

    #[actix_rt::test]
    async fn engine_failure_propagates() {
        let mut index = MockUserIndex::new();
        index
            .expect_search_users()
            .times(1)
            .returning(|_| Err(UserIndexError::transport("connection refused")));

        let error = UserSearch::new(Arc::new(index))
            .search("jane", 0, 20)
            .await
            .expect_err("search should fail");
        assert!(matches!(error, UserIndexError::Transport { .. }));
    }
}
