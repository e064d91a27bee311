//! Board Session
//!
//! Ties a board to its store and the signed-in user: loads on sign-in,
//! persists after every change, clears storage on sign-out.

use tracing::{debug, error, info};

use crate::board::{Applied, Board, BoardAction, IdGenerator, UuidIds};
use crate::identity::User;
use crate::repository::SnapshotStore;

/// Board state owned by one signed-in user
#[derive(Debug, Clone)]
pub struct BoardSession<S> {
    store: S,
    user: Option<User>,
    board: Option<Board>,
}

impl<S: SnapshotStore> BoardSession<S> {
    pub fn new(store: S) -> Self {
        Self { store, user: None, board: None }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The loaded board; None while signed out
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Attach a user and load their board from storage
    pub fn sign_in(&mut self, user: User) {
        info!(user = %user.email, "board session started");
        self.board = Some(self.store.load_board());
        self.user = Some(user);
    }

    /// Resume with whoever the identity provider remembers.
    ///
    /// With nobody signed in, data left from an earlier session is cleared so
    /// it never reaches the next user.
    pub fn restore(&mut self, user: Option<User>) {
        match user {
            Some(user) => self.sign_in(user),
            None => self.sign_out(),
        }
    }

    /// Drop the user, the in-memory board, and everything persisted
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.email, "board session ended");
        }
        self.board = None;
        if let Err(e) = self.store.clear() {
            error!(error = %e, "failed to clear stored board");
        }
    }

    /// Apply an action and persist the result.
    ///
    /// Ignored while signed out. Not-found targets are silent no-ops.
    pub fn dispatch(&mut self, action: BoardAction) -> Option<Applied> {
        self.dispatch_with(&UuidIds, action)
    }

    pub fn dispatch_with(&mut self, ids: &dyn IdGenerator, action: BoardAction) -> Option<Applied> {
        let (Some(_), Some(board)) = (&self.user, self.board.as_mut()) else {
            debug!(action = action.name(), "action ignored: no signed-in user");
            return None;
        };
        match board.apply_with(ids, action) {
            Ok(applied) => {
                if applied.changed() {
                    if let Err(e) = self.store.save_board(board) {
                        error!(error = %e, "failed to persist board");
                    }
                }
                Some(applied)
            }
            Err(e) => {
                debug!(error = %e, "action ignored");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SequentialIds;
    use crate::defaults::default_board;
    use crate::domain::{ColumnId, TaskDraft};
    use crate::repository::MemoryStore;

    fn user() -> User {
        User::from_email("somon@example.com").unwrap()
    }

    fn add_task(column: &str) -> BoardAction {
        BoardAction::AddTask { column_id: ColumnId::new(column), draft: TaskDraft::titled("T") }
    }

    #[test]
    fn test_signed_out_session_ignores_actions() {
        let mut session = BoardSession::new(MemoryStore::new());
        assert!(session.dispatch(add_task("todo")).is_none());
        assert!(session.board().is_none());
        assert!(session.store().raw().is_empty());
    }

    #[test]
    fn test_dispatch_persists_changes() {
        let ids = SequentialIds::new();
        let mut session = BoardSession::new(MemoryStore::new());
        session.sign_in(user());

        let applied = session.dispatch_with(&ids, add_task("todo"));
        assert!(matches!(applied, Some(Applied::TaskAdded(_))));
        assert_eq!(session.store().load_board(), session.board().cloned().unwrap());
    }

    #[test]
    fn test_not_found_is_silent_and_not_saved() {
        let ids = SequentialIds::new();
        let mut session = BoardSession::new(MemoryStore::new());
        session.sign_in(user());

        assert!(session.dispatch_with(&ids, add_task("colX")).is_none());
        assert_eq!(session.board(), Some(&default_board()));
        assert!(session.store().raw().is_empty());
    }

    #[test]
    fn test_sign_out_clears_storage() {
        let ids = SequentialIds::new();
        let mut session = BoardSession::new(MemoryStore::new());
        session.sign_in(user());
        session.dispatch_with(&ids, add_task("done"));
        assert!(!session.store().raw().is_empty());

        session.sign_out();
        assert!(session.user().is_none());
        assert!(session.board().is_none());
        assert!(session.store().raw().is_empty());
    }

    #[test]
    fn test_restore_without_user_clears_leftover_board() {
        let ids = SequentialIds::new();
        let mut first = BoardSession::new(MemoryStore::new());
        first.sign_in(user());
        first.dispatch_with(&ids, add_task("todo"));
        let leftover = first.store().raw();

        let mut next = BoardSession::new(MemoryStore::with_raw(leftover.columns.as_deref(), leftover.tasks.as_deref()));
        next.restore(None);
        assert!(next.user().is_none());
        assert!(next.store().raw().is_empty());

        next.sign_in(User::from_email("other@example.com").unwrap());
        assert_eq!(next.board(), Some(&default_board()));
    }

    #[test]
    fn test_restore_with_user_loads_board() {
        let store = MemoryStore::new();
        let mut board = default_board();
        board.add_column_with(&SequentialIds::new(), "Later", "#000");
        store.save_board(&board).unwrap();

        let mut session = BoardSession::new(store);
        session.restore(Some(user()));
        assert_eq!(session.board(), Some(&board));
    }

    #[test]
    fn test_blank_column_title_does_not_lose_board_on_reload() {
        let ids = SequentialIds::new();
        let mut session = BoardSession::new(MemoryStore::new());
        session.sign_in(user());
        session.dispatch_with(&ids, add_task("todo"));
        session.dispatch_with(&ids, BoardAction::AddColumn { title: String::new(), color: "plain".into() });
        let before = session.board().cloned().unwrap();
        assert_eq!(before.tasks().len(), default_board().tasks().len() + 1);

        let raw = session.store().raw();
        let mut reloaded = BoardSession::new(MemoryStore::with_raw(raw.columns.as_deref(), raw.tasks.as_deref()));
        reloaded.sign_in(user());
        assert_eq!(reloaded.board(), Some(&before));
    }
}
