//! Admin dashboard state.
//!
//! The backend hands over both arrays whole; filtering and sorting happen
//! here, client-side, as pure view-model functions over the fetched rows.

use meridian_core::api::types::{AdminUser, InquiryRecord};

use crate::common::TextField;

/// What the dashboard currently shows.
#[derive(Debug, Clone)]
pub enum AdminData {
    /// Fetch in flight (entered on navigation).
    Loading,
    Ready {
        users: Vec<AdminUser>,
        queries: Vec<InquiryRecord>,
    },
    /// 403 — rendered in place as permission denied, not a redirect.
    Denied,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Users,
    Inquiries,
}

/// Sort order for the users table; `s` cycles through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    Newest,
    Name,
    Email,
}

impl UserSort {
    pub fn next(self) -> Self {
        match self {
            UserSort::Newest => UserSort::Name,
            UserSort::Name => UserSort::Email,
            UserSort::Email => UserSort::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserSort::Newest => "newest",
            UserSort::Name => "name",
            UserSort::Email => "email",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminScreen {
    pub data: AdminData,
    pub tab: AdminTab,
    pub filter: TextField,
    pub filter_focused: bool,
    pub sort: UserSort,
    pub selected: usize,
}

impl AdminScreen {
    pub fn new() -> Self {
        Self {
            data: AdminData::Loading,
            tab: AdminTab::Users,
            filter: TextField::new("Filter"),
            filter_focused: false,
            sort: UserSort::Newest,
            selected: 0,
        }
    }

    /// Users visible under the current filter and sort.
    pub fn visible_users(&self) -> Vec<&AdminUser> {
        let AdminData::Ready { users, .. } = &self.data else {
            return vec![];
        };
        let mut rows = filter_users(users, self.filter.trimmed());
        sort_users(&mut rows, self.sort);
        rows
    }

    /// Inquiries visible under the current filter, newest first.
    pub fn visible_queries(&self) -> Vec<&InquiryRecord> {
        let AdminData::Ready { queries, .. } = &self.data else {
            return vec![];
        };
        let mut rows = filter_queries(queries, self.filter.trimmed());
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows
    }

    pub fn visible_len(&self) -> usize {
        match self.tab {
            AdminTab::Users => self.visible_users().len(),
            AdminTab::Inquiries => self.visible_queries().len(),
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub fn filter_users<'a>(users: &'a [AdminUser], filter: &str) -> Vec<&'a AdminUser> {
    let needle = filter.to_lowercase();
    users
        .iter()
        .filter(|user| {
            needle.is_empty() || matches(&user.name, &needle) || matches(&user.email, &needle)
        })
        .collect()
}

pub fn sort_users(rows: &mut [&AdminUser], sort: UserSort) {
    match sort {
        // Newest accounts first; id order stands in for signup order.
        UserSort::Newest => rows.sort_by(|a, b| b.id.cmp(&a.id)),
        UserSort::Name => rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        UserSort::Email => rows.sort_by(|a, b| a.email.to_lowercase().cmp(&b.email.to_lowercase())),
    }
}

pub fn filter_queries<'a>(queries: &'a [InquiryRecord], filter: &str) -> Vec<&'a InquiryRecord> {
    let needle = filter.to_lowercase();
    queries
        .iter()
        .filter(|record| {
            needle.is_empty()
                || matches(&record.name, &needle)
                || matches(&record.email, &needle)
                || matches(&record.message, &needle)
                || record
                    .subject
                    .as_deref()
                    .is_some_and(|subject| matches(subject, &needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use meridian_core::session::Role;

    use super::*;

    fn user(id: u64, name: &str, email: &str) -> AdminUser {
        AdminUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            role: Role::Regular,
            created_at: None,
        }
    }

    fn inquiry(id: u64, subject: Option<&str>, message: &str) -> InquiryRecord {
        InquiryRecord {
            id,
            user_id: None,
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: subject.map(str::to_string),
            message: message.to_string(),
            kind: meridian_core::api::types::InquiryKind::Contact,
            created_at: None,
        }
    }

    #[test]
    fn filter_matches_name_or_email_case_insensitively() {
        let users = vec![
            user(1, "Ana Silva", "ana@example.com"),
            user(2, "Bo Chen", "bo@works.io"),
        ];
        let rows = filter_users(&users, "WORKS");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let users = vec![user(1, "Ana", "a@x.io"), user(2, "Bo", "b@x.io")];
        assert_eq!(filter_users(&users, "").len(), 2);
    }

    #[test]
    fn sort_orders_are_stable_and_correct() {
        let users = vec![
            user(1, "cara", "c@x.io"),
            user(3, "Ana", "a@x.io"),
            user(2, "bo", "b@x.io"),
        ];
        let mut rows = filter_users(&users, "");

        sort_users(&mut rows, UserSort::Name);
        let names: Vec<_> = rows.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "bo", "cara"]);

        sort_users(&mut rows, UserSort::Newest);
        let ids: Vec<_> = rows.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn query_filter_searches_subject_and_body() {
        let queries = vec![
            inquiry(1, Some("Fees"), "What do you charge?"),
            inquiry(2, None, "Opening hours"),
        ];
        assert_eq!(filter_queries(&queries, "fees").len(), 1);
        assert_eq!(filter_queries(&queries, "hours").len(), 1);
        assert_eq!(filter_queries(&queries, "nothing").len(), 0);
    }

    #[test]
    fn selection_clamps_to_visible_rows() {
        let mut screen = AdminScreen::new();
        screen.data = AdminData::Ready {
            users: vec![user(1, "Ana", "a@x.io")],
            queries: vec![],
        };
        screen.selected = 9;
        screen.clamp_selection();
        assert_eq!(screen.selected, 0);
    }
}
