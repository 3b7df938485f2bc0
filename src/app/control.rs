//! The timezone select control.
//!
//! [`TimezoneSelect`] ties the pieces together: it owns the host's props,
//! rebuilds options when the registry or label policy changes, resolves the
//! current value on every read, routes widget events through
//! [`handle_event`](super::handle_event) and executes the resulting actions by
//! calling the host's callbacks.

use super::{handle_event, Action, Event, ListState, MenuState};
use crate::domain::{
    AltNameFilter, CurrentValue, LabelPolicy, LabelStyle, TimezoneOption, ZoneRegistry,
};
use crate::select::{build_options, resolve};
use crate::tz::{Clock, SystemClock};
use crate::ui::{ListView, ListWidget};
use std::collections::BTreeMap;
use std::fmt;

/// Passthrough key that starts the menu open.
pub const MENU_IS_OPEN: &str = "menu_is_open";

/// Everything the host configures on the control.
#[derive(Debug, Clone, Default)]
pub struct Props {
    /// Current selection, owned by the host.
    pub value: CurrentValue,

    /// Label style, abbreviation length and alt-name filter.
    pub policy: LabelPolicy,

    /// Zones to offer. Defaults to the bundled table.
    pub timezones: ZoneRegistry,

    /// Settings forwarded verbatim to the list widget.
    pub passthrough: BTreeMap<String, String>,
}

type ChangeCallback = Box<dyn FnMut(&TimezoneOption)>;
type BlurCallback = Box<dyn FnMut()>;

/// Timezone select control.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use chrono::{TimeZone, Utc};
/// use tzselect::app::{Event, Props, TimezoneSelect};
/// use tzselect::tz::FixedClock;
///
/// let winter = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
/// let picked = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&picked);
///
/// let mut select = TimezoneSelect::with_clock(Props::default(), winter)
///     .on_change(move |option| sink.borrow_mut().push(option.value.clone()));
///
/// for c in "hawaii".chars() {
///     select.handle(&Event::Char(c));
/// }
/// select.handle(&Event::Select);
///
/// assert_eq!(*picked.borrow(), vec!["Pacific/Honolulu".to_string()]);
/// ```
pub struct TimezoneSelect<C: Clock = SystemClock> {
    props: Props,
    clock: C,
    list: ListState,
    on_change: Option<ChangeCallback>,
    on_blur: Option<BlurCallback>,
}

impl TimezoneSelect<SystemClock> {
    /// Creates a control reading the system clock.
    #[must_use]
    pub fn new(props: Props) -> Self {
        Self::with_clock(props, SystemClock)
    }
}

impl<C: Clock> TimezoneSelect<C> {
    /// Creates a control with an explicit clock.
    #[must_use]
    pub fn with_clock(props: Props, clock: C) -> Self {
        let menu = MenuState::from_flag(props.passthrough.get(MENU_IS_OPEN).map(String::as_str));
        let options = build_options(&props.timezones, &props.policy, clock.now());
        let mut list = ListState::new(options);
        list.menu = menu;

        let mut select = Self {
            props,
            clock,
            list,
            on_change: None,
            on_blur: None,
        };
        select.focus_selected();
        select
    }

    /// Registers the selection callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&TimezoneOption) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Registers the blur callback.
    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Built options, ascending by offset.
    #[must_use]
    pub fn options(&self) -> &[TimezoneOption] {
        self.list.options()
    }

    #[must_use]
    pub const fn list(&self) -> &ListState {
        &self.list
    }

    /// The option the current value resolves to, computed fresh on each call.
    #[must_use]
    pub fn selected(&self) -> Option<&TimezoneOption> {
        resolve(&self.props.value, self.list.options(), self.clock.now())
    }

    /// Replaces the current value. Options are not rebuilt.
    pub fn set_value(&mut self, value: impl Into<CurrentValue>) {
        self.props.value = value.into();
        self.focus_selected();
    }

    /// Replaces the registry and rebuilds options.
    pub fn set_timezones(&mut self, timezones: ZoneRegistry) {
        if self.props.timezones != timezones {
            self.props.timezones = timezones;
            self.rebuild();
        }
    }

    /// Replaces the whole label policy, rebuilding options if it changed.
    pub fn set_policy(&mut self, policy: LabelPolicy) {
        if self.props.policy != policy {
            self.props.policy = policy;
            self.rebuild();
        }
    }

    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.set_policy(LabelPolicy {
            style,
            ..self.props.policy
        });
    }

    pub fn set_max_abbr_length(&mut self, max_abbr_length: usize) {
        self.set_policy(LabelPolicy {
            max_abbr_length,
            ..self.props.policy
        });
    }

    pub fn set_alt_name_filter(&mut self, alt_name_filter: AltNameFilter) {
        self.set_policy(LabelPolicy {
            alt_name_filter,
            ..self.props.policy
        });
    }

    /// Recomputes options from the registry and policy at the current instant.
    ///
    /// Labels reflect "now", so hosts that stay open across a DST transition
    /// call this to refresh them.
    pub fn rebuild(&mut self) {
        let options = build_options(&self.props.timezones, &self.props.policy, self.clock.now());
        self.list.set_options(options);
        self.focus_selected();
    }

    /// Routes a widget event and executes the resulting actions.
    ///
    /// Returns `true` if the widget should re-render.
    pub fn handle(&mut self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.list, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );
        for action in actions {
            self.execute_action(action);
        }
        should_render
    }

    /// Computes the view model for up to `rows` visible options.
    #[must_use]
    pub fn view(&self, rows: usize) -> ListView {
        self.list.compute_viewmodel(self.selected(), rows)
    }

    /// Hands the view model and passthrough settings to `widget`.
    pub fn render<W: ListWidget + ?Sized>(&self, widget: &mut W, rows: usize) {
        widget.render(&self.view(rows), &self.props.passthrough);
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Change(option) => {
                if let Some(callback) = self.on_change.as_mut() {
                    callback(&option);
                } else {
                    tracing::debug!(value = %option.value, "no change callback registered");
                }
            }
            Action::Blur => {
                if let Some(callback) = self.on_blur.as_mut() {
                    callback();
                }
            }
        }
    }

    fn focus_selected(&mut self) {
        let value = self.selected().map(|option| option.value.clone());
        if let Some(value) = value {
            self.list.focus_value(&value);
        }
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for TimezoneSelect<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimezoneSelect")
            .field("props", &self.props)
            .field("clock", &self.clock)
            .field("list", &self.list)
            .field("on_change", &self.on_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}
