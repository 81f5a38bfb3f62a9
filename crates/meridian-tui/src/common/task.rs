//! Async task lifecycle state.
//!
//! One slot per task kind. While a slot is active the triggering control is
//! disabled (the reducer refuses to emit a second effect of that kind), which
//! is what gives the session its single-writer-at-a-time guarantee. A
//! completion whose id no longer matches the active slot is stale and gets
//! dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Every async operation the portal can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    SessionCheck,
    Login,
    Register,
    Logout,
    ProfileSave,
    PasswordChange,
    Contact,
    Query,
    Rating,
    AdminFetch,
    ForgotPassword,
    ResetPassword,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

/// Lifecycle state for one task kind (mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the slot iff `id` is the active task. Returns false for stale
    /// completions, which the caller discards.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub session_check: TaskState,
    pub login: TaskState,
    pub register: TaskState,
    pub logout: TaskState,
    pub profile_save: TaskState,
    pub password_change: TaskState,
    pub contact: TaskState,
    pub query: TaskState,
    pub rating: TaskState,
    pub admin_fetch: TaskState,
    pub forgot_password: TaskState,
    pub reset_password: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::SessionCheck => &self.session_check,
            TaskKind::Login => &self.login,
            TaskKind::Register => &self.register,
            TaskKind::Logout => &self.logout,
            TaskKind::ProfileSave => &self.profile_save,
            TaskKind::PasswordChange => &self.password_change,
            TaskKind::Contact => &self.contact,
            TaskKind::Query => &self.query,
            TaskKind::Rating => &self.rating,
            TaskKind::AdminFetch => &self.admin_fetch,
            TaskKind::ForgotPassword => &self.forgot_password,
            TaskKind::ResetPassword => &self.reset_password,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::SessionCheck => &mut self.session_check,
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::Logout => &mut self.logout,
            TaskKind::ProfileSave => &mut self.profile_save,
            TaskKind::PasswordChange => &mut self.password_change,
            TaskKind::Contact => &mut self.contact,
            TaskKind::Query => &mut self.query,
            TaskKind::Rating => &mut self.rating,
            TaskKind::AdminFetch => &mut self.admin_fetch,
            TaskKind::ForgotPassword => &mut self.forgot_password,
            TaskKind::ResetPassword => &mut self.reset_password,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.session_check.is_running()
            || self.login.is_running()
            || self.register.is_running()
            || self.logout.is_running()
            || self.profile_save.is_running()
            || self.password_change.is_running()
            || self.contact.is_running()
            || self.query.is_running()
            || self.rating.is_running()
            || self.admin_fetch.is_running()
            || self.forgot_password.is_running()
            || self.reset_password.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_completion_is_rejected() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();

        let mut state = TaskState::default();
        state.on_started(&TaskStarted { id: first });
        state.on_started(&TaskStarted { id: second });

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }
}
