//! Scroll-wheel time picker for selecting a clock time.
//!
//! ## Usage
//!
//! Use to let users choose a time for alarms, reminders, or schedules by
//! spinning hour, minute, and day-period wheels.
use std::sync::Once;

use closure::closure;
use derive_setters::Setters;
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    boxed::{BoxedArgs, boxed},
    button::{ButtonArgs, button},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialTheme},
};
use tessera_ui::{
    Callback, CallbackWith, Color, DimensionValue, Dp, Modifier, State, remember, tessera,
    use_context,
};

use crate::{
    locale::{
        NumeralFormat, TimePickerLocale, TimePickerLocaleOverrides, detect_locale, is_rtl,
        uses_persian_numerals,
    },
    time_format::{DayPeriod, format_number, format_time, parse_time},
    wheel::{DEFAULT_VISIBLE_COUNT, WheelArgs, wheel},
};

const PICKER_MIN_WIDTH: Dp = Dp(280.0);
const PICKER_MAX_WIDTH: Dp = Dp(520.0);
const PICKER_ITEM_HEIGHT: Dp = Dp(48.0);
const SELECTION_RADIUS: Dp = Dp(8.0);
const SEPARATOR_GAP: Dp = Dp(6.0);
const PERIOD_GAP: Dp = Dp(12.0);
const SECTION_GAP: Dp = Dp(16.0);
const LABEL_GAP: Dp = Dp(24.0);

const PERIODS: [DayPeriod; 2] = [DayPeriod::Am, DayPeriod::Pm];

/// Holds the parsed selection backing a [`time_picker`].
///
/// The controller is a cache over the controlled `value` string: it reparses
/// when the host hands in a new value and never mutates itself when a wheel
/// moves. Wheel commits produce a fresh value string through the `set_*`
/// methods, and the host decides whether to adopt it.
pub struct TimePickerController {
    value: String,
    hour: u32,
    minute: u32,
    period: Option<DayPeriod>,
    is_12_hour: bool,
}

impl TimePickerController {
    /// Creates an empty controller; the first [`Self::sync_value`] fills it.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            hour: 0,
            minute: 0,
            period: None,
            is_12_hour: false,
        }
    }

    /// Reparses the controlled value when it or the clock format changed.
    pub fn sync_value(&mut self, value: &str, is_12_hour: bool) {
        if self.value == value && self.is_12_hour == is_12_hour {
            return;
        }
        let (hour, minute, period) = parse_time(value, is_12_hour);
        self.value = value.to_string();
        self.is_12_hour = is_12_hour;
        self.hour = hour;
        self.minute = minute;
        self.period = period;
    }

    /// Returns the value string this controller last parsed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the parsed hour: 1-12 on a 12-hour clock, 0-23 otherwise.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the parsed minute.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the parsed day period, present only on a 12-hour clock.
    pub fn period(&self) -> Option<DayPeriod> {
        self.period
    }

    /// Returns whether the cached value was parsed as a 12-hour clock.
    pub fn is_12_hour(&self) -> bool {
        self.is_12_hour
    }

    /// Returns the value string with the hour replaced.
    ///
    /// The cached day period is carried over only on a 12-hour clock.
    pub fn set_hour(&self, hour: u32) -> String {
        format_time(hour, self.minute, self.emitted_period())
    }

    /// Returns the value string with the minute replaced.
    ///
    /// The cached day period is carried over only on a 12-hour clock.
    pub fn set_minute(&self, minute: u32) -> String {
        format_time(self.hour, minute, self.emitted_period())
    }

    /// Returns the value string with the day period replaced.
    pub fn set_period(&self, period: DayPeriod) -> String {
        format_time(self.hour, self.minute, Some(period))
    }

    fn emitted_period(&self) -> Option<DayPeriod> {
        if self.is_12_hour { self.period } else { None }
    }
}

impl Default for TimePickerController {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved per-build configuration shared by the time picker wheels.
///
/// Produced from [`TimePickerArgs`] by [`TimePickerConfig::resolve`]; hosts
/// composing their own picker chrome can reuse it with
/// [`time_picker_wheels`].
#[derive(Clone, PartialEq)]
pub struct TimePickerConfig {
    /// Hour values presented by the hour wheel, in wheel order.
    pub hours: Vec<u32>,
    /// Minute values presented by the minute wheel, in wheel order.
    pub minutes: Vec<u32>,
    /// Whether the picker runs on a 12-hour clock with a period wheel.
    pub is_12_hour: bool,
    /// Display strings after locale resolution and overrides.
    pub locale: TimePickerLocale,
    /// Whether the resolved locale reads right-to-left.
    pub is_rtl: bool,
    /// Whether wheel glyphs use Persian-Indic digits.
    pub persian_numerals: bool,
    /// Height of one wheel row.
    pub item_height: Dp,
    /// Number of rows visible in each wheel viewport.
    pub visible_count: usize,
    /// Whether the hour and minute wheels wrap around.
    pub looping: bool,
    /// Whether user interaction is enabled.
    pub enabled: bool,
}

impl TimePickerConfig {
    /// Resolves wheel domains, locale strings, and numeral policy from args.
    ///
    /// The string table follows the numeral decision, so Persian digits come
    /// with Persian chrome and an explicit [`NumeralFormat::En`] restores the
    /// English table even on a Persian locale.
    pub fn resolve(args: &TimePickerArgs) -> Self {
        let tag = args.locale.clone().unwrap_or_else(detect_locale);
        let persian_numerals = uses_persian_numerals(&tag, args.numeral_format);
        let base = if persian_numerals {
            TimePickerLocale::persian()
        } else {
            TimePickerLocale::english()
        };
        Self {
            hours: resolve_hours(args),
            minutes: resolve_minutes(args),
            is_12_hour: args.is_12_hour,
            locale: args.locale_overrides.apply(base),
            is_rtl: is_rtl(&tag, args.numeral_format),
            persian_numerals,
            item_height: args.item_height,
            visible_count: args.visible_count,
            looping: args.looping,
            enabled: args.enabled,
        }
    }
}

/// Configuration options for [`time_picker`].
#[derive(PartialEq, Clone, Setters)]
pub struct TimePickerArgs {
    /// Modifier chain applied to the picker column.
    pub modifier: Modifier,
    /// Controlled time value, such as `"21:45"` or `"09:30 PM"`.
    #[setters(into)]
    pub value: String,
    /// Whether the picker runs on a 12-hour clock with a period wheel.
    pub is_12_hour: bool,
    /// Explicit hour wheel values, overriding the clock-derived range.
    #[setters(strip_option)]
    pub hours: Option<Vec<u32>>,
    /// Explicit minute wheel values, overriding the step-derived range.
    #[setters(strip_option)]
    pub minutes: Option<Vec<u32>>,
    /// Minute granularity used when `minutes` is not set, clamped to 1-60.
    #[setters(strip_option)]
    pub minute_step: Option<u32>,
    /// Height of one wheel row.
    pub item_height: Dp,
    /// Number of rows visible in each wheel viewport.
    pub visible_count: usize,
    /// Whether the hour and minute wheels wrap around.
    pub looping: bool,
    /// Whether user interaction is enabled.
    pub enabled: bool,
    /// Digit shapes used for wheel glyphs; also selects the built-in string
    /// table.
    pub numeral_format: NumeralFormat,
    /// Explicit locale tag such as `"en"` or `"fa"`; detected from the
    /// environment when unset.
    #[setters(strip_option, into)]
    pub locale: Option<String>,
    /// Per-string replacements layered over the locale table.
    pub locale_overrides: TimePickerLocaleOverrides,
    /// Whether the heading row is rendered.
    pub show_title: bool,
    /// Whether the wheel labels row is rendered.
    pub show_labels: bool,
    /// Whether the confirm button is rendered.
    pub show_confirm: bool,
    /// Callback invoked with the new value string after a wheel commit.
    #[setters(skip)]
    pub on_change: CallbackWith<String>,
    /// Callback invoked when the confirm button is pressed.
    #[setters(skip)]
    pub on_confirm: Callback,
    /// Optional external controller for reading the parsed selection.
    ///
    /// When this is `None`, `time_picker` creates and owns an internal one.
    #[setters(skip)]
    pub state: Option<State<TimePickerController>>,
}

impl Default for TimePickerArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().constrain(
                Some(DimensionValue::Wrap {
                    min: Some(PICKER_MIN_WIDTH.into()),
                    max: Some(PICKER_MAX_WIDTH.into()),
                }),
                Some(DimensionValue::WRAP),
            ),
            value: String::new(),
            is_12_hour: false,
            hours: None,
            minutes: None,
            minute_step: None,
            item_height: PICKER_ITEM_HEIGHT,
            visible_count: DEFAULT_VISIBLE_COUNT,
            looping: false,
            enabled: true,
            numeral_format: NumeralFormat::default(),
            locale: None,
            locale_overrides: TimePickerLocaleOverrides::default(),
            show_title: true,
            show_labels: true,
            show_confirm: true,
            on_change: CallbackWith::new(|_| {}),
            on_confirm: Callback::default(),
            state: None,
        }
    }
}

impl TimePickerArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<String>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets the on_confirm handler.
    pub fn on_confirm<F>(mut self, on_confirm: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_confirm = Callback::new(on_confirm);
        self
    }

    /// Sets the on_confirm handler using a shared callback.
    pub fn on_confirm_shared(mut self, on_confirm: impl Into<Callback>) -> Self {
        self.on_confirm = on_confirm.into();
        self
    }

    /// Sets an external time picker controller.
    pub fn state(mut self, state: State<TimePickerController>) -> Self {
        self.state = Some(state);
        self
    }
}

fn resolve_hours(args: &TimePickerArgs) -> Vec<u32> {
    if let Some(hours) = &args.hours {
        return hours.clone();
    }
    if args.is_12_hour {
        (1..=12).collect()
    } else {
        (0..24).collect()
    }
}

fn resolve_minutes(args: &TimePickerArgs) -> Vec<u32> {
    if let Some(minutes) = &args.minutes {
        return minutes.clone();
    }
    match args.minute_step {
        Some(step) => {
            let step = normalize_minute_step(step);
            (0..60).step_by(step as usize).collect()
        }
        None => (0..60).collect(),
    }
}

fn normalize_minute_step(step: u32) -> u32 {
    if (1..=60).contains(&step) {
        return step;
    }
    static WARNED: Once = Once::new();
    WARNED.call_once(|| {
        tracing::warn!("time picker minute_step {step} is out of range, clamping to 1-60");
    });
    step.clamp(1, 60)
}

fn domain_index(domain: &[u32], value: u32) -> usize {
    domain.iter().position(|&v| v == value).unwrap_or(0)
}

/// # time_picker
///
/// Renders a scroll-wheel time picker with a title, wheel labels, and a
/// confirm button around the hour, minute, and optional day-period wheels.
///
/// ## Usage
///
/// Use when users need to choose a time for reminders or scheduling. The
/// picker is controlled: pass the current value string and adopt the strings
/// reported through `on_change`.
///
/// ## Parameters
///
/// - `args` — configuration for the value, clock format, wheel domains,
///   locale, and callbacks; see [`TimePickerArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{remember, tessera};
/// use tessera_wheel_picker::time_picker::{TimePickerArgs, TimePickerController, time_picker};
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # #[tessera]
/// # fn component() {
/// let state = remember(TimePickerController::new);
/// # material_theme(MaterialTheme::default, move || {
/// time_picker(&TimePickerArgs::default().value("09:30").state(state));
/// # });
///
/// assert_eq!(state.with(|picker| picker.hour()), 9);
/// assert_eq!(state.with(|picker| picker.minute()), 30);
/// # }
/// # component();
/// ```
#[tessera]
pub fn time_picker(args: &TimePickerArgs) {
    let mut args = args.clone();
    let state = args
        .state
        .unwrap_or_else(|| remember(TimePickerController::new));
    args.state = Some(state);
    time_picker_node(&args);
}

#[tessera]
fn time_picker_node(args: &TimePickerArgs) {
    let args = args.clone();
    let state = args
        .state
        .expect("time_picker_node requires state to be set");
    state.with_mut(|c| c.sync_value(&args.value, args.is_12_hour));

    let config = TimePickerConfig::resolve(&args);
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let title_size = theme.typography.title_medium.font_size;
    let label_size = theme.typography.label_medium.font_size;
    let title_color = content_color(theme.color_scheme.on_surface, config.enabled);
    let label_color = content_color(theme.color_scheme.on_surface_variant, config.enabled);

    let modifier = args.modifier;
    let on_change = args.on_change.clone();
    let on_confirm = args.on_confirm.clone();
    let show_title = args.show_title;
    let show_labels = args.show_labels;
    let show_confirm = args.show_confirm;

    column(
        ColumnArgs::default()
            .modifier(modifier)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            if show_title {
                let title = config.locale.title.clone();
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(title.clone())
                            .size(title_size)
                            .color(title_color),
                    );
                });
                scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().height(SECTION_GAP)));
                });
            }

            if show_labels {
                let labels_config = config.clone();
                scope.child(move || {
                    wheel_labels_row(&labels_config, label_size, label_color);
                });
                scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0))));
                });
            }

            let wheels_config = config.clone();
            let wheels_on_change = on_change.clone();
            scope.child(move || {
                time_picker_wheels(&wheels_config, state, wheels_on_change.clone());
            });

            if show_confirm {
                scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().height(SECTION_GAP)));
                });
                let confirm = config.locale.confirm.clone();
                let enabled = config.enabled;
                let on_confirm = on_confirm.clone();
                scope.child(move || {
                    confirm_button(confirm.clone(), on_confirm.clone(), enabled);
                });
            }
        },
    );
}

/// # time_picker_wheels
///
/// Renders the bare wheel row of a time picker: a selection indicator strip
/// with the hour, minute, and optional day-period wheels centered over it.
///
/// ## Usage
///
/// Use to embed time wheels in custom chrome; [`time_picker`] wraps this with
/// a title, labels, and a confirm button.
///
/// ## Parameters
///
/// - `config` — resolved wheel domains and presentation; see
///   [`TimePickerConfig::resolve`].
/// - `state` — controller caching the parsed selection.
/// - `on_change` — receives the new value string after a wheel commit.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::{CallbackWith, remember, tessera};
/// use tessera_wheel_picker::time_picker::{
///     TimePickerArgs, TimePickerConfig, TimePickerController, time_picker_wheels,
/// };
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # #[tessera]
/// # fn component() {
/// let state = remember(TimePickerController::new);
/// state.with_mut(|picker| picker.sync_value("21:45", false));
/// let config = TimePickerConfig::resolve(&TimePickerArgs::default().locale("en"));
/// # material_theme(MaterialTheme::default, move || {
/// time_picker_wheels(&config, state, CallbackWith::new(|_value| {}));
/// # });
///
/// assert_eq!(state.with(|picker| picker.hour()), 21);
/// # }
/// # component();
/// ```
#[tessera]
pub fn time_picker_wheels(
    config: &TimePickerConfig,
    state: State<TimePickerController>,
    on_change: CallbackWith<String>,
) {
    let config = config.clone();
    let item_height = config.item_height;
    boxed(
        BoxedArgs::default().alignment(Alignment::Center),
        move |scope| {
            scope.child(move || {
                let scheme = use_context::<MaterialTheme>()
                    .expect("MaterialTheme must be provided")
                    .get()
                    .color_scheme;
                surface(&SurfaceArgs::with_child(
                    SurfaceArgs::default()
                        .modifier(Modifier::new().fill_max_width().height(item_height))
                        .style(SurfaceStyle::Filled {
                            color: scheme.surface_container_highest,
                        })
                        .shape(Shape::rounded_rectangle(SELECTION_RADIUS)),
                    || {},
                ));
            });

            scope.child(move || {
                wheels_row(&config, state, on_change.clone());
            });
        },
    );
}

fn wheels_row(
    config: &TimePickerConfig,
    state: State<TimePickerController>,
    on_change: CallbackWith<String>,
) {
    let config = config.clone();
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let separator_size = theme.typography.headline_small.font_size;
    let separator_color = content_color(theme.color_scheme.on_surface_variant, config.enabled);

    row(
        RowArgs::default()
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |row_scope| {
            let hour_config = config.clone();
            let hour_on_change = on_change.clone();
            row_scope.child(move || {
                hour_wheel(&hour_config, state, hour_on_change.clone());
            });

            row_scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().width(SEPARATOR_GAP)));
            });
            row_scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(":")
                        .size(separator_size)
                        .color(separator_color),
                );
            });
            row_scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().width(SEPARATOR_GAP)));
            });

            let minute_config = config.clone();
            let minute_on_change = on_change.clone();
            row_scope.child(move || {
                minute_wheel(&minute_config, state, minute_on_change.clone());
            });

            if config.is_12_hour {
                row_scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().width(PERIOD_GAP)));
                });
                let period_config = config.clone();
                let period_on_change = on_change.clone();
                row_scope.child(move || {
                    period_wheel(&period_config, state, period_on_change.clone());
                });
            }
        },
    );
}

fn hour_wheel(
    config: &TimePickerConfig,
    state: State<TimePickerController>,
    on_change: CallbackWith<String>,
) {
    let hours = config.hours.clone();
    let persian = config.persian_numerals;
    let enabled = config.enabled;
    let index = domain_index(&hours, state.with(|c| c.hour()));

    let mut args = WheelArgs::default()
        .item_count(hours.len())
        .value(index)
        .item_height(config.item_height)
        .visible_count(config.visible_count)
        .looping(config.looping)
        .enabled(enabled)
        .accessibility_label(config.locale.hour_label.clone());
    if let Some(&hour) = hours.get(index) {
        args = args.accessibility_value(format_number(hour, persian));
    }

    let item_hours = hours.clone();
    wheel(
        args.on_change(closure!(clone hours, clone on_change, |index: usize| {
            let value = state.with(|c| c.set_hour(hours[index]));
            on_change.call(value);
        })),
        move |index, selected| {
            wheel_item(format_number(item_hours[index], persian), selected, enabled);
        },
    );
}

fn minute_wheel(
    config: &TimePickerConfig,
    state: State<TimePickerController>,
    on_change: CallbackWith<String>,
) {
    let minutes = config.minutes.clone();
    let persian = config.persian_numerals;
    let enabled = config.enabled;
    let index = domain_index(&minutes, state.with(|c| c.minute()));

    let mut args = WheelArgs::default()
        .item_count(minutes.len())
        .value(index)
        .item_height(config.item_height)
        .visible_count(config.visible_count)
        .looping(config.looping)
        .enabled(enabled)
        .accessibility_label(config.locale.minute_label.clone());
    if let Some(&minute) = minutes.get(index) {
        args = args.accessibility_value(format_number(minute, persian));
    }

    let item_minutes = minutes.clone();
    wheel(
        args.on_change(closure!(clone minutes, clone on_change, |index: usize| {
            let value = state.with(|c| c.set_minute(minutes[index]));
            on_change.call(value);
        })),
        move |index, selected| {
            wheel_item(format_number(item_minutes[index], persian), selected, enabled);
        },
    );
}

fn period_wheel(
    config: &TimePickerConfig,
    state: State<TimePickerController>,
    on_change: CallbackWith<String>,
) {
    let enabled = config.enabled;
    let period = state.with(|c| c.period()).unwrap_or(DayPeriod::Am);
    let index = usize::from(period == DayPeriod::Pm);

    wheel(
        WheelArgs::default()
            .item_count(PERIODS.len())
            .value(index)
            .item_height(config.item_height)
            .visible_count(config.visible_count)
            .enabled(enabled)
            .accessibility_label(config.locale.period_label.clone())
            .accessibility_value(PERIODS[index].as_str())
            .on_change(closure!(clone on_change, |index: usize| {
                let value = state.with(|c| c.set_period(PERIODS[index]));
                on_change.call(value);
            })),
        move |index, selected| {
            wheel_item(PERIODS[index].as_str().to_string(), selected, enabled);
        },
    );
}

fn wheel_labels_row(config: &TimePickerConfig, size: Dp, color: Color) {
    let hour_label = config.locale.hour_label.clone();
    let minute_label = config.locale.minute_label.clone();
    let period_label = config
        .is_12_hour
        .then(|| config.locale.period_label.clone());

    row(
        RowArgs::default()
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |row_scope| {
            let hour_label = hour_label.clone();
            row_scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(hour_label.clone())
                        .size(size)
                        .color(color),
                );
            });
            row_scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().width(LABEL_GAP)));
            });
            let minute_label = minute_label.clone();
            row_scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(minute_label.clone())
                        .size(size)
                        .color(color),
                );
            });
            if let Some(period_label) = period_label.clone() {
                row_scope.child(|| {
                    spacer(&SpacerArgs::new(Modifier::new().width(LABEL_GAP)));
                });
                row_scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(period_label.clone())
                            .size(size)
                            .color(color),
                    );
                });
            }
        },
    );
}

fn wheel_item(label: String, selected: bool, enabled: bool) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let (size, color) = if selected {
        (
            theme.typography.title_medium.font_size,
            theme.color_scheme.on_surface,
        )
    } else {
        (
            theme.typography.body_large.font_size,
            theme.color_scheme.on_surface_variant,
        )
    };
    text(
        &TextArgs::default()
            .text(label)
            .size(size)
            .color(content_color(color, enabled)),
    );
}

fn confirm_button(label: String, on_confirm: Callback, enabled: bool) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let label_color = content_color(scheme.on_primary, enabled);
    button(&ButtonArgs::with_child(
        ButtonArgs::filled(move || {
            if enabled {
                on_confirm.call();
            }
        }),
        move || {
            text(&TextArgs::default().text(label.clone()).color(label_color));
        },
    ));
}

fn content_color(color: Color, enabled: bool) -> Color {
    if enabled {
        color
    } else {
        color.with_alpha(MaterialAlpha::DISABLED_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_domains_follow_the_clock() {
        let args = TimePickerArgs::default();
        assert_eq!(resolve_hours(&args), (0..24).collect::<Vec<_>>());
        assert_eq!(resolve_minutes(&args), (0..60).collect::<Vec<_>>());

        let args = TimePickerArgs::default().is_12_hour(true);
        assert_eq!(resolve_hours(&args), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn default_viewport_shows_five_48dp_rows() {
        let config = TimePickerConfig::resolve(&TimePickerArgs::default());
        assert_eq!(config.item_height, Dp(48.0));
        assert_eq!(config.visible_count, 5);
    }

    #[test]
    fn minute_step_builds_a_coarser_domain() {
        let args = TimePickerArgs::default().minute_step(15);
        assert_eq!(resolve_minutes(&args), vec![0, 15, 30, 45]);

        let args = TimePickerArgs::default().minute_step(20);
        assert_eq!(resolve_minutes(&args), vec![0, 20, 40]);
    }

    #[test]
    fn minute_step_clamps_out_of_range_values() {
        let args = TimePickerArgs::default().minute_step(0);
        assert_eq!(resolve_minutes(&args), (0..60).collect::<Vec<_>>());

        let args = TimePickerArgs::default().minute_step(75);
        assert_eq!(resolve_minutes(&args), vec![0]);
    }

    #[test]
    fn explicit_domains_win_over_derived_ones() {
        let args = TimePickerArgs::default()
            .hours(vec![0, 6, 12, 18])
            .minutes(vec![0, 30])
            .minute_step(15);
        let config = TimePickerConfig::resolve(&args);
        assert_eq!(config.hours, vec![0, 6, 12, 18]);
        assert_eq!(config.minutes, vec![0, 30]);
    }

    #[test]
    fn off_domain_values_select_the_first_row() {
        assert_eq!(domain_index(&[0, 15, 30, 45], 30), 2);
        assert_eq!(domain_index(&[0, 15, 30, 45], 7), 0);
        assert_eq!(domain_index(&[], 7), 0);
    }

    #[test]
    fn config_resolves_persian_locale() {
        let config = TimePickerConfig::resolve(&TimePickerArgs::default().locale("fa"));
        assert_eq!(config.locale.title, "انتخاب ساعت");
        assert!(config.is_rtl);
        assert!(config.persian_numerals);
    }

    #[test]
    fn arabic_locales_share_the_persian_table() {
        let config = TimePickerConfig::resolve(&TimePickerArgs::default().locale("ar"));
        assert!(config.is_rtl);
        assert!(config.persian_numerals);
        assert_eq!(config.locale.title, "انتخاب ساعت");
    }

    #[test]
    fn numeral_format_overrides_the_locale() {
        let args = TimePickerArgs::default()
            .locale("fa")
            .numeral_format(NumeralFormat::En);
        let config = TimePickerConfig::resolve(&args);
        assert!(!config.is_rtl);
        assert!(!config.persian_numerals);
        assert_eq!(config.locale.confirm, "Confirm");

        let args = TimePickerArgs::default()
            .locale("en")
            .numeral_format(NumeralFormat::Fa);
        let config = TimePickerConfig::resolve(&args);
        assert!(config.persian_numerals);
        assert_eq!(config.locale.confirm, "تأیید");
    }

    #[test]
    fn locale_overrides_reach_the_config() {
        let args = TimePickerArgs::default()
            .locale("en")
            .locale_overrides(TimePickerLocaleOverrides::default().confirm("Done"));
        let config = TimePickerConfig::resolve(&args);
        assert_eq!(config.locale.confirm, "Done");
        assert_eq!(config.locale.title, "Select Time");
    }

    #[test]
    fn controller_reparses_when_the_value_changes() {
        let mut controller = TimePickerController::new();

        controller.sync_value("21:45", false);
        assert_eq!(controller.hour(), 21);
        assert_eq!(controller.minute(), 45);
        assert_eq!(controller.period(), None);

        controller.sync_value("09:30 PM", true);
        assert_eq!(controller.hour(), 9);
        assert_eq!(controller.minute(), 30);
        assert_eq!(controller.period(), Some(DayPeriod::Pm));
        assert_eq!(controller.value(), "09:30 PM");
    }

    #[test]
    fn controller_reparses_when_the_clock_format_changes() {
        let mut controller = TimePickerController::new();

        controller.sync_value("01:00", false);
        assert_eq!(controller.period(), None);

        controller.sync_value("01:00", true);
        assert_eq!(controller.period(), Some(DayPeriod::Am));
        assert!(controller.is_12_hour());
    }

    #[test]
    fn set_methods_reserialize_without_mutating_the_cache() {
        let mut controller = TimePickerController::new();
        controller.sync_value("09:30 PM", true);

        assert_eq!(controller.set_hour(11), "11:30 PM");
        assert_eq!(controller.set_minute(0), "09:00 PM");
        assert_eq!(controller.set_period(DayPeriod::Am), "09:30 AM");

        // The cache only moves when the host hands the new value back.
        assert_eq!(controller.hour(), 9);
        assert_eq!(controller.minute(), 30);
        assert_eq!(controller.period(), Some(DayPeriod::Pm));
    }

    #[test]
    fn hour_and_minute_edits_drop_the_period_on_a_24_hour_clock() {
        let mut controller = TimePickerController::new();
        controller.sync_value("09:30 PM", false);
        assert_eq!(controller.period(), Some(DayPeriod::Pm));

        assert_eq!(controller.set_hour(10), "10:30");
        assert_eq!(controller.set_minute(0), "09:00");
    }

    #[test]
    fn empty_value_parses_to_clock_defaults() {
        let mut controller = TimePickerController::new();
        controller.sync_value("", true);
        assert_eq!(controller.minute(), 0);
        assert_eq!(controller.period(), Some(DayPeriod::Am));
    }
}
