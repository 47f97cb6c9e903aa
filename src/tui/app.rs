use crate::catalog::{Catalog, Course, SearchHit, SubcourseKey};
use crate::config::Config;
use crate::keybindings::{Action, KeybindingMode, Keybindings};
use crate::lesson::{ComponentRegistry, ContentResolver, ModuleLoader, RenderedLesson, Resolution};
use crate::router::{Navigation, Page, Router};
use crate::tui::syntax::SyntaxHighlighter;
use crate::tui::theme::{Theme, ThemeName};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Courses,
    Lessons,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
    Prompt,
    Filter,
}

/// What the content pane of the course browser shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonView {
    /// Nothing selected yet
    Empty,
    Loading {
        key: SubcourseKey,
    },
    Ready {
        key: SubcourseKey,
        lesson: RenderedLesson,
    },
    /// Load or render failed; `r` retries
    Failed {
        key: SubcourseKey,
        message: String,
    },
}

impl LessonView {
    pub fn key(&self) -> Option<SubcourseKey> {
        match self {
            LessonView::Empty => None,
            LessonView::Loading { key }
            | LessonView::Ready { key, .. }
            | LessonView::Failed { key, .. } => Some(*key),
        }
    }
}

pub struct App {
    catalog: Catalog,
    registry: Arc<ComponentRegistry>,
    resolver: ContentResolver,
    pub highlighter: SyntaxHighlighter,
    router: Router,

    // Page state
    pub page: Page,
    pub path: String,
    pub page_scroll: u16,

    // Course browser state
    pub focus: Focus,
    pub course_state: ListState,
    pub lesson_state: ListState,
    pub selected: Option<SubcourseKey>,
    pub view: LessonView,
    pub content_scroll: u16,
    pub content_height: u16, // Set by the renderer

    // Popups and input
    pub mode: AppMode,
    pub help_scroll: u16,
    pub input: String,
    pub filter_hits: Vec<SearchHit>,
    pub filter_state: ListState,
    pub status_message: Option<String>,

    pub current_theme: ThemeName,
    pub theme: Theme,
    pub sidebar_width: u16,
    keybindings: Keybindings,

    // Configuration persistence
    config: Config,
    config_path: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    /// Build the app and navigate to `start`.
    ///
    /// The registry is the only component table lessons are rendered with.
    pub fn new(
        catalog: Catalog,
        registry: Arc<ComponentRegistry>,
        loader: Arc<dyn ModuleLoader>,
        config: Config,
        start: &str,
    ) -> Self {
        let current_theme = config.theme_name();
        let mut highlighter = SyntaxHighlighter::new();
        highlighter.set_theme(current_theme.syntax_theme());

        let mut course_state = ListState::default();
        if !catalog.is_empty() {
            course_state.select(Some(0));
        }

        let mut app = Self {
            catalog,
            registry,
            resolver: ContentResolver::new(loader),
            highlighter,
            router: Router::new(),
            page: Page::Home,
            path: "/".to_string(),
            page_scroll: 0,
            focus: Focus::Courses,
            course_state,
            lesson_state: ListState::default(),
            selected: None,
            view: LessonView::Empty,
            content_scroll: 0,
            content_height: 0,
            mode: AppMode::Normal,
            help_scroll: 0,
            input: String::new(),
            filter_hits: Vec::new(),
            filter_state: ListState::default(),
            status_message: None,
            current_theme,
            theme: Theme::from_name(current_theme),
            sidebar_width: config.ui.sidebar_width.clamp(15, 60),
            keybindings: config.keybindings(),
            config,
            config_path: None,
            should_quit: false,
        };

        tracing::info!(
            courses = app.catalog.len(),
            components = app.registry.len(),
            source = %app.resolver.loader().describe(),
            "coursebook started"
        );
        app.navigate(start);
        app
    }

    /// Persist theme changes to `path`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn keybindings(&self) -> &Keybindings {
        &self.keybindings
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.router.can_go_forward()
    }

    /// Course under the cursor in the course list.
    pub fn highlighted_course(&self) -> Option<&Course> {
        self.course_state
            .selected()
            .and_then(|i| self.catalog.courses().get(i))
    }

    pub fn keybinding_mode(&self) -> KeybindingMode {
        match self.mode {
            AppMode::Help => KeybindingMode::Help,
            AppMode::Prompt => KeybindingMode::Prompt,
            AppMode::Filter => KeybindingMode::Filter,
            AppMode::Normal if self.page == Page::Learn => KeybindingMode::Browser,
            AppMode::Normal => KeybindingMode::Page,
        }
    }

    // === Navigation ===

    pub fn navigate(&mut self, path: &str) {
        let nav = self.router.navigate(path);
        self.apply_navigation(nav);
    }

    pub fn go_back(&mut self) {
        match self.router.back() {
            Some(nav) => self.apply_navigation(nav),
            None => self.status_message = Some("Already at the first page".to_string()),
        }
    }

    pub fn go_forward(&mut self) {
        match self.router.forward() {
            Some(nav) => self.apply_navigation(nav),
            None => self.status_message = Some("No page to go forward to".to_string()),
        }
    }

    fn apply_navigation(&mut self, nav: Navigation) {
        if nav.page == Page::NotFound {
            tracing::info!(path = %nav.path, "no page for path");
        }
        self.page = nav.page;
        self.path = nav.path;
        self.page_scroll = 0;

        // Deep link: /learn/:course/:subcourse
        if let (Some(course), Some(number)) = (nav.params.get("course"), nav.params.get("subcourse"))
        {
            self.open_deep_link(course, number);
        }
    }

    fn open_deep_link(&mut self, course: &str, number: &str) {
        let course = match self.catalog.course(course) {
            Ok(course) => course.id,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };
        match number.parse::<usize>() {
            Ok(n) if n >= 1 => {
                self.select_subcourse(SubcourseKey::new(course, n - 1));
                self.focus = Focus::Content;
            }
            _ => self.status_message = Some(format!("Invalid lesson number: {}", number)),
        }
    }

    // === Lesson selection and loading ===

    /// Make `key` the selected lesson and start resolving it. Any earlier
    /// request still in flight becomes stale.
    pub fn select_subcourse(&mut self, key: SubcourseKey) {
        let subcourse = match self.catalog.subcourse(key) {
            Ok(subcourse) => subcourse,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };

        if let Some(pos) = self.catalog.courses().iter().position(|c| c.id == key.course) {
            self.course_state.select(Some(pos));
        }
        self.lesson_state.select(Some(key.index));
        self.selected = Some(key);
        self.content_scroll = 0;
        self.view = LessonView::Loading { key };

        tracing::info!(lesson = %key, title = subcourse.title, "lesson selected");
        self.resolver.request(key, subcourse.module);
    }

    /// Load the selected lesson again after a failure.
    pub fn retry(&mut self) {
        match &self.view {
            LessonView::Failed { key, .. } => {
                let key = *key;
                self.select_subcourse(key);
            }
            _ => self.status_message = Some("Nothing to retry".to_string()),
        }
    }

    /// Collect finished loads. Returns true when the view changed.
    pub fn tick(&mut self) -> bool {
        let Some(resolution) = self.resolver.poll() else {
            return false;
        };
        if Some(resolution.key()) != self.selected {
            return false;
        }

        let reloaded = matches!(&self.view, LessonView::Ready { key, .. } if *key == resolution.key());
        self.view = match resolution {
            Resolution::Ready { key, module } => match self.registry.render(&module) {
                Ok(mut lesson) => {
                    self.highlighter.highlight_lesson(&mut lesson);
                    LessonView::Ready { key, lesson }
                }
                Err(e) => {
                    tracing::warn!(lesson = %key, "lesson failed to render: {}", e);
                    LessonView::Failed {
                        key,
                        message: e.to_string(),
                    }
                }
            },
            Resolution::Failed { key, error } => LessonView::Failed {
                key,
                message: error.to_string(),
            },
        };
        if !reloaded {
            self.content_scroll = 0;
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.resolver.is_pending()
    }

    /// Lesson modules changed on disk: drop them from the cache and reload
    /// the one on screen.
    pub fn modules_changed(&mut self, modules: &[String]) {
        let mut reload = None;
        for module in modules {
            let Some((key, module_ref)) = self.catalog.locate(module) else {
                tracing::debug!(module, "changed file is not a catalog lesson");
                continue;
            };
            self.resolver.invalidate(module_ref);
            if self.selected == Some(key) {
                reload = Some((key, module_ref));
            }
        }

        if let Some((key, module_ref)) = reload {
            tracing::info!(lesson = %key, "reloading changed lesson");
            self.resolver.request(key, module_ref);
            self.status_message = Some("↻ Lesson reloaded (file changed)".to_string());
        }
    }

    /// Any lesson module may have changed: empty the cache and reload the
    /// lesson on screen.
    pub fn content_rescanned(&mut self) {
        self.resolver.clear_cache();
        let Some(key) = self.selected else {
            return;
        };
        if let Ok(subcourse) = self.catalog.subcourse(key) {
            tracing::info!(lesson = %key, "reloading lesson after rescan");
            self.resolver.request(key, subcourse.module);
            self.status_message = Some("↻ Lessons reloaded".to_string());
        }
    }

    // === Lists ===

    fn lesson_count(&self) -> usize {
        self.highlighted_course()
            .map(|c| c.subcourses.len())
            .unwrap_or(0)
    }

    fn move_selection(&mut self, delta: isize) {
        match self.focus {
            Focus::Courses => {
                let len = self.catalog.len();
                if move_list(&mut self.course_state, len, delta) {
                    self.lesson_state.select(None);
                }
            }
            Focus::Lessons => {
                let len = self.lesson_count();
                move_list(&mut self.lesson_state, len, delta);
            }
            Focus::Content => self.scroll_content(delta),
        }
    }

    fn scroll_content(&mut self, delta: isize) {
        let max = self.content_height.saturating_sub(1);
        self.content_scroll = offset(self.content_scroll, delta).min(max);
    }

    fn open_selection(&mut self) {
        match self.focus {
            Focus::Courses => {
                self.focus = Focus::Lessons;
                if self.lesson_state.selected().is_none() && self.lesson_count() > 0 {
                    self.lesson_state.select(Some(0));
                }
            }
            Focus::Lessons => {
                let key = self
                    .highlighted_course()
                    .zip(self.lesson_state.selected())
                    .map(|(course, index)| SubcourseKey::new(course.id, index));
                if let Some(key) = key {
                    self.select_subcourse(key);
                    self.focus = Focus::Content;
                }
            }
            Focus::Content => {}
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::Courses, true) => Focus::Lessons,
            (Focus::Lessons, true) => Focus::Content,
            (Focus::Content, true) => Focus::Courses,
            (Focus::Courses, false) => Focus::Content,
            (Focus::Lessons, false) => Focus::Courses,
            (Focus::Content, false) => Focus::Lessons,
        };
        if self.focus == Focus::Lessons
            && self.lesson_state.selected().is_none()
            && self.lesson_count() > 0
        {
            self.lesson_state.select(Some(0));
        }
    }

    // === Prompt and filter ===

    fn open_prompt(&mut self) {
        self.mode = AppMode::Prompt;
        self.input.clear();
    }

    fn open_filter(&mut self) {
        self.mode = AppMode::Filter;
        self.input.clear();
        self.update_filter();
    }

    fn update_filter(&mut self) {
        self.filter_hits = if self.input.trim().is_empty() {
            Vec::new()
        } else {
            self.catalog.search(&self.input)
        };
        self.filter_state
            .select(if self.filter_hits.is_empty() { None } else { Some(0) });
    }

    fn confirm_input(&mut self) {
        let mode = self.mode;
        self.mode = AppMode::Normal;
        match mode {
            AppMode::Prompt => {
                let path = std::mem::take(&mut self.input);
                if !path.trim().is_empty() {
                    self.navigate(&path);
                }
            }
            AppMode::Filter => {
                let hit = self
                    .filter_state
                    .selected()
                    .and_then(|i| self.filter_hits.get(i))
                    .map(|hit| hit.key);
                self.input.clear();
                self.filter_hits.clear();
                if let Some(key) = hit {
                    self.select_subcourse(key);
                    self.focus = Focus::Content;
                }
            }
            AppMode::Normal | AppMode::Help => {}
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
        if self.mode == AppMode::Filter {
            self.update_filter();
        }
    }

    fn input_backspace(&mut self) {
        self.input.pop();
        if self.mode == AppMode::Filter {
            self.update_filter();
        }
    }

    // === View ===

    pub fn toggle_help(&mut self) {
        self.mode = if self.mode == AppMode::Help {
            AppMode::Normal
        } else {
            self.help_scroll = 0;
            AppMode::Help
        };
    }

    /// Switch to the next theme, rehighlight the lesson on screen and save
    /// the choice.
    pub fn cycle_theme(&mut self) {
        self.current_theme = self.current_theme.next();
        self.theme = Theme::from_name(self.current_theme);
        self.highlighter.set_theme(self.current_theme.syntax_theme());

        if let LessonView::Ready { lesson, .. } = &mut self.view {
            lesson.clear_highlighting();
            self.highlighter.highlight_lesson(lesson);
        }

        self.config.ui.theme = self.current_theme.to_string();
        self.status_message = Some(format!("Theme: {}", self.current_theme));
        if let Some(path) = &self.config_path
            && let Err(e) = self.config.save_to(path)
        {
            tracing::warn!("failed to save theme: {}", e);
            self.status_message = Some(format!("✗ Could not save theme: {}", e));
        }
    }

    // === Input dispatch ===

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        let mode = self.keybinding_mode();

        if let Some(action) = self.keybindings.dispatch(mode, key) {
            self.handle_action(action);
            return;
        }

        if matches!(self.mode, AppMode::Prompt | AppMode::Filter)
            && let KeyCode::Char(c) = key.code
            && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            self.input_char(c);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let in_filter = self.mode == AppMode::Filter;
        let on_browser = self.page == Page::Learn;

        if let Some(path) = action.route() {
            self.navigate(path);
            return;
        }

        match action {
            Action::Next if in_filter => {
                move_list(&mut self.filter_state, self.filter_hits.len(), 1);
            }
            Action::Previous if in_filter => {
                move_list(&mut self.filter_state, self.filter_hits.len(), -1);
            }
            Action::Next => self.move_selection(1),
            Action::Previous => self.move_selection(-1),
            Action::First => self.move_selection(isize::MIN / 2),
            Action::Last => self.move_selection(isize::MAX / 2),
            Action::PageDown if on_browser => self.move_selection(10),
            Action::PageUp if on_browser => self.move_selection(-10),
            Action::PageDown => self.page_scroll = offset(self.page_scroll, 10),
            Action::PageUp => self.page_scroll = offset(self.page_scroll, -10),
            Action::ScrollDown if on_browser => self.scroll_content(1),
            Action::ScrollUp if on_browser => self.scroll_content(-1),
            Action::ScrollDown => self.page_scroll = offset(self.page_scroll, 1),
            Action::ScrollUp => self.page_scroll = offset(self.page_scroll, -1),

            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrevious => self.cycle_focus(false),
            Action::Open if on_browser => self.open_selection(),
            Action::Open => match self.page {
                Page::Home => self.navigate("/learn"),
                Page::NotFound => self.navigate("/"),
                _ => {}
            },
            Action::Retry => self.retry(),

            Action::GoBack => self.go_back(),
            Action::GoForward => self.go_forward(),

            Action::OpenPrompt => self.open_prompt(),
            Action::EnterFilter => self.open_filter(),
            Action::Confirm => self.confirm_input(),
            Action::Cancel => {
                self.mode = AppMode::Normal;
                self.input.clear();
                self.filter_hits.clear();
            }
            Action::InputBackspace => self.input_backspace(),

            Action::ToggleHelp => self.toggle_help(),
            Action::CycleTheme => self.cycle_theme(),
            Action::HelpScrollDown => self.help_scroll = self.help_scroll.saturating_add(1),
            Action::HelpScrollUp => self.help_scroll = self.help_scroll.saturating_sub(1),

            Action::Quit => self.should_quit = true,

            // Page jumps are handled above
            Action::GoToHome
            | Action::GoToLearn
            | Action::GoToAuth
            | Action::GoToFaq
            | Action::GoToContact
            | Action::GoToAbout => {}
        }
    }
}

/// Move a list selection by `delta`, clamped to the list. Returns true if
/// the selection changed.
fn move_list(state: &mut ListState, len: usize, delta: isize) -> bool {
    if len == 0 {
        return false;
    }
    let current = state.selected();
    let base = current.unwrap_or(0) as isize;
    let next = base.saturating_add(delta).clamp(0, len as isize - 1) as usize;
    state.select(Some(next));
    current != Some(next)
}

fn offset(value: u16, delta: isize) -> u16 {
    (value as isize)
        .saturating_add(delta)
        .clamp(0, u16::MAX as isize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseId;
    use crate::lesson::BundledLoader;
    use crate::lesson::resolver::tests::{GatedLoader, wait_until};
    use std::sync::atomic::Ordering;

    fn app_with(loader: Arc<dyn ModuleLoader>) -> App {
        App::new(
            Catalog::builtin().unwrap(),
            Arc::new(ComponentRegistry::with_defaults().unwrap()),
            loader,
            Config::default(),
            "/learn",
        )
    }

    fn wait_for_view(app: &mut App) {
        wait_until(|| {
            app.tick();
            !matches!(app.view, LessonView::Loading { .. })
        });
    }

    fn python(index: usize) -> SubcourseKey {
        SubcourseKey::new(CourseId::Python, index)
    }

    #[test]
    fn test_python_intro_then_get_started_shows_only_second() {
        let loader = Arc::new(GatedLoader::default());
        let release_intro = loader.gate("python/IntroductionPython");
        let release_started = loader.gate("python/GetStartedPython");
        let mut app = app_with(loader.clone());

        app.select_subcourse(python(0));
        app.select_subcourse(python(1));
        assert_eq!(app.view, LessonView::Loading { key: python(1) });

        release_started.send(Ok(())).unwrap();
        wait_for_view(&mut app);
        release_intro.send(Ok(())).unwrap();
        // The late result arrives and is dropped
        wait_until(|| {
            assert!(!app.tick());
            app.resolver.stale_discarded() == 1
        });

        let LessonView::Ready { key, lesson } = &app.view else {
            panic!("expected ready view, got {:?}", app.view);
        };
        assert_eq!(*key, python(1));
        assert_eq!(lesson.title.as_deref(), Some("python/GetStartedPython"));
    }

    #[test]
    fn test_bundled_lesson_is_highlighted() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.select_subcourse(python(0));
        wait_for_view(&mut app);

        let LessonView::Ready { lesson, .. } = &app.view else {
            panic!("expected ready view, got {:?}", app.view);
        };
        assert!(lesson.code_blocks().count() > 0);
        assert!(lesson.code_blocks().all(|c| c.is_highlighted()));
    }

    #[test]
    fn test_missing_module_fails_and_retry_reloads() {
        let mut app = app_with(Arc::new(BundledLoader));
        // Bundle has no Ruby lessons
        let ruby = SubcourseKey::new(CourseId::Ruby, 0);
        app.select_subcourse(ruby);
        wait_for_view(&mut app);
        assert!(matches!(app.view, LessonView::Failed { key, .. } if key == ruby));

        app.handle_action(Action::Retry);
        assert_eq!(app.view, LessonView::Loading { key: ruby });
        wait_for_view(&mut app);
        assert!(matches!(app.view, LessonView::Failed { .. }));
    }

    #[test]
    fn test_unknown_subcourse_sets_status() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.select_subcourse(python(99));
        assert!(app.status_message.is_some());
        assert_eq!(app.view, LessonView::Empty);
    }

    #[test]
    fn test_navigation_and_not_found() {
        let mut app = app_with(Arc::new(BundledLoader));
        assert_eq!(app.page, Page::Learn);
        assert_eq!(app.keybinding_mode(), KeybindingMode::Browser);

        app.navigate("/missing");
        assert_eq!(app.page, Page::NotFound);
        assert_eq!(app.keybinding_mode(), KeybindingMode::Page);

        app.handle_action(Action::GoBack);
        assert_eq!(app.page, Page::Learn);

        app.handle_action(Action::GoToFaq);
        assert_eq!(app.page, Page::Faq);
    }

    #[test]
    fn test_prompt_navigates() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.handle_action(Action::OpenPrompt);
        assert_eq!(app.keybinding_mode(), KeybindingMode::Prompt);
        for c in "/about".chars() {
            app.input_char(c);
        }
        app.handle_action(Action::Confirm);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.page, Page::About);
    }

    #[test]
    fn test_deep_link_selects_lesson() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.navigate("/learn/Go/6");
        assert_eq!(app.page, Page::Learn);
        assert_eq!(app.selected, Some(SubcourseKey::new(CourseId::Go, 5)));
        wait_for_view(&mut app);
        assert!(matches!(app.view, LessonView::Ready { .. }));

        app.navigate("/learn/Cobol/1");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_deep_link_reaches_csharp() {
        let csharp = |index| Some(SubcourseKey::new(CourseId::CSharp, index));
        let mut app = app_with(Arc::new(BundledLoader));

        app.navigate("/learn/C#/1");
        assert_eq!(app.page, Page::Learn);
        assert_eq!(app.selected, csharp(0));

        app.navigate("/learn/C%23/2");
        assert_eq!(app.selected, csharp(1));

        app.navigate("/learn/csharp/3");
        assert_eq!(app.selected, csharp(2));

        app.navigate("/learn/CSharp/1");
        assert_eq!(app.selected, csharp(0));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_browser_keys_open_lesson() {
        let mut app = app_with(Arc::new(BundledLoader));
        // Python is the first course; open it and its first lesson
        app.handle_action(Action::Open);
        assert_eq!(app.focus, Focus::Lessons);
        app.handle_action(Action::Next);
        app.handle_action(Action::Open);
        assert_eq!(app.selected, Some(python(1)));
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_filter_selects_hit() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.handle_action(Action::EnterFilter);
        for c in "loops python".chars() {
            app.input_char(c);
        }
        assert!(!app.filter_hits.is_empty());
        let first = app.filter_hits[0].key;
        app.handle_action(Action::Confirm);
        assert_eq!(app.selected, Some(first));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_cycle_theme_rehighlights() {
        let mut app = app_with(Arc::new(BundledLoader));
        app.select_subcourse(python(0));
        wait_for_view(&mut app);
        let before = app.view.clone();

        app.handle_action(Action::CycleTheme);
        assert_eq!(app.current_theme, ThemeName::Nord);
        let LessonView::Ready { lesson, .. } = &app.view else {
            panic!("expected ready view");
        };
        assert!(lesson.code_blocks().all(|c| c.is_highlighted()));
        assert_ne!(app.view, before);
    }

    #[test]
    fn test_modules_changed_reloads_current_lesson() {
        let loader = Arc::new(GatedLoader::default());
        let mut app = app_with(loader.clone());
        app.select_subcourse(python(0));
        wait_for_view(&mut app);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);

        app.modules_changed(&[
            "python/IntroductionPython".to_string(),
            "notes/scratch".to_string(),
        ]);
        wait_until(|| {
            app.tick();
            loader.loads.load(Ordering::SeqCst) == 2 && !app.is_loading()
        });
        assert!(matches!(app.view, LessonView::Ready { .. }));
    }

    #[test]
    fn test_rescan_drops_cache_and_reloads_current_lesson() {
        let loader = Arc::new(GatedLoader::default());
        let mut app = app_with(loader.clone());
        app.select_subcourse(python(1));
        wait_for_view(&mut app);
        app.select_subcourse(python(0));
        wait_for_view(&mut app);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);

        app.content_rescanned();
        wait_until(|| {
            app.tick();
            loader.loads.load(Ordering::SeqCst) == 3 && !app.is_loading()
        });
        assert!(matches!(app.view, LessonView::Ready { key, .. } if key == python(0)));

        // The other lesson was dropped too
        app.select_subcourse(python(1));
        wait_for_view(&mut app);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 4);
    }
}
