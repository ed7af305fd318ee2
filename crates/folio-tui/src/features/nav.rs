//! The view router: which page is shown, and which nested detail view.
//!
//! Selection nests user → blog → post under the home page. Two standing
//! rules hold at all times:
//! - selecting at one level clears every level below it;
//! - the login and dashboard pages follow the auth flag (`on_auth_changed`),
//!   re-checked after every reducer pass rather than only at transition time.

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Login,
}

/// The detail view rendered inside the home page. Innermost selection wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    Listing,
    User(i64),
    Blog(String),
    Post(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub selected_user: Option<i64>,
    pub selected_blog: Option<String>,
    pub selected_post: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            selected_user: None,
            selected_blog: None,
            selected_post: None,
        }
    }
}

impl NavState {
    /// Explicit navigation to a page clears all selections.
    pub fn go_to(&mut self, page: Page) {
        self.page = page;
        self.selected_user = None;
        self.selected_blog = None;
        self.selected_post = None;
    }

    pub fn select_user(&mut self, id: i64) {
        self.selected_user = Some(id);
        self.selected_blog = None;
        self.selected_post = None;
    }

    pub fn select_blog(&mut self, id: String) {
        self.selected_blog = Some(id);
        self.selected_post = None;
    }

    pub fn select_post(&mut self, id: String) {
        self.selected_post = Some(id);
    }

    /// Pops exactly one selection level. Returns false when there was
    /// nothing to pop (already at the top-level listing).
    pub fn back(&mut self) -> bool {
        if self.selected_post.take().is_some() {
            return true;
        }
        if self.selected_blog.take().is_some() {
            return true;
        }
        self.selected_user.take().is_some()
    }

    /// Reactive correction: login and dashboard gate on the auth flag.
    /// Returns whether the page was forced elsewhere.
    pub fn on_auth_changed(&mut self, authenticated: bool) -> bool {
        match self.page {
            Page::Login if authenticated => {
                self.go_to(Page::Dashboard);
                true
            }
            Page::Dashboard if !authenticated => {
                self.go_to(Page::Login);
                true
            }
            _ => false,
        }
    }

    /// Rendering precedence inside the home page.
    pub fn home_view(&self) -> HomeView {
        if let Some(post) = &self.selected_post {
            return HomeView::Post(post.clone());
        }
        if let Some(blog) = &self.selected_blog {
            return HomeView::Blog(blog.clone());
        }
        if let Some(user) = self.selected_user {
            return HomeView::User(user);
        }
        HomeView::Listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_home_listing() {
        let nav = NavState::default();
        assert_eq!(nav.page, Page::Home);
        assert_eq!(nav.home_view(), HomeView::Listing);
    }

    #[test]
    fn selecting_a_blog_clears_the_post() {
        let mut nav = NavState::default();
        nav.select_user(1);
        nav.select_blog("b1".to_string());
        nav.select_post("p1".to_string());
        nav.select_blog("b2".to_string());

        assert_eq!(nav.selected_blog.as_deref(), Some("b2"));
        assert_eq!(nav.selected_post, None);
    }

    #[test]
    fn selecting_a_user_clears_blog_and_post() {
        let mut nav = NavState::default();
        nav.select_user(1);
        nav.select_blog("b1".to_string());
        nav.select_post("p1".to_string());
        nav.select_user(2);

        assert_eq!(nav.selected_user, Some(2));
        assert_eq!(nav.selected_blog, None);
        assert_eq!(nav.selected_post, None);
    }

    #[test]
    fn back_pops_one_level_at_a_time() {
        let mut nav = NavState::default();
        nav.select_user(1);
        nav.select_blog("b1".to_string());
        nav.select_post("p1".to_string());

        assert!(nav.back());
        assert_eq!(nav.home_view(), HomeView::Blog("b1".to_string()));
        assert!(nav.back());
        assert_eq!(nav.home_view(), HomeView::User(1));
        assert!(nav.back());
        assert_eq!(nav.home_view(), HomeView::Listing);
        assert!(!nav.back());
    }

    #[test]
    fn back_from_blog_without_post_clears_blog_only_once() {
        let mut nav = NavState::default();
        nav.select_user(4);
        nav.select_blog("b9".to_string());

        assert!(nav.back());
        assert_eq!(nav.selected_blog, None);
        assert_eq!(nav.selected_user, Some(4));
    }

    #[test]
    fn go_to_clears_selections() {
        let mut nav = NavState::default();
        nav.select_user(1);
        nav.select_blog("b1".to_string());
        nav.go_to(Page::Dashboard);

        assert_eq!(nav.page, Page::Dashboard);
        assert_eq!(nav.selected_user, None);
        assert_eq!(nav.selected_blog, None);
    }

    #[test]
    fn login_page_corrects_to_dashboard_when_authenticated() {
        let mut nav = NavState::default();
        nav.go_to(Page::Login);
        assert!(nav.on_auth_changed(true));
        assert_eq!(nav.page, Page::Dashboard);
    }

    #[test]
    fn dashboard_corrects_to_login_when_anonymous() {
        let mut nav = NavState::default();
        nav.go_to(Page::Dashboard);
        assert!(nav.on_auth_changed(false));
        assert_eq!(nav.page, Page::Login);
    }

    #[test]
    fn logout_while_parked_on_login_stays_on_login() {
        let mut nav = NavState::default();
        nav.go_to(Page::Login);
        assert!(!nav.on_auth_changed(false));
        assert_eq!(nav.page, Page::Login);
    }

    #[test]
    fn home_is_never_corrected() {
        let mut nav = NavState::default();
        nav.select_user(2);
        assert!(!nav.on_auth_changed(true));
        assert!(!nav.on_auth_changed(false));
        assert_eq!(nav.selected_user, Some(2));
    }

    #[test]
    fn innermost_selection_wins() {
        let mut nav = NavState::default();
        nav.select_user(1);
        assert_eq!(nav.home_view(), HomeView::User(1));
        nav.select_blog("b".to_string());
        assert_eq!(nav.home_view(), HomeView::Blog("b".to_string()));
        nav.select_post("p".to_string());
        assert_eq!(nav.home_view(), HomeView::Post("p".to_string()));
    }
}
