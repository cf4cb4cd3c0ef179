//! Scroll-wheel selector for picking a single value from a vertical list.
//!
//! ## Usage
//!
//! Drag, scroll, tap, or use arrow keys to line one item up with the center
//! row, iOS style.
use std::time::{Duration, Instant};

use derive_setters::Setters;
use tessera_components::{
    modifier::{ModifierExt as _, SemanticsArgs},
    pos_misc::is_position_in_component,
};
use tessera_ui::{
    CallbackWith, ComputedData, Constraint, CursorEventContent, DimensionValue, Dp,
    MeasurementError, Modifier, PressKeyEventType, Px, PxPosition, State,
    accesskit::Role,
    focus_state::Focus,
    key,
    layout::{LayoutInput, LayoutOutput, LayoutSpec, RenderInput},
    remember, tessera, winit,
};

/// Default height of one item row.
pub const DEFAULT_ITEM_HEIGHT: Dp = Dp(40.0);
/// Default number of rows visible in the viewport.
pub const DEFAULT_VISIBLE_COUNT: usize = 5;

const DEFAULT_SCROLL_SMOOTHING: f32 = 0.12;
const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);
const RELEASE_SETTLE_DELAY: Duration = Duration::from_millis(50);
const TAP_SLOP: f32 = 4.0;

/// Configuration arguments for wheel selectors.
#[derive(Clone, Setters)]
pub struct WheelArgs {
    /// Modifier chain applied to the wheel subtree.
    pub modifier: Modifier,
    /// Total number of selectable items.
    pub item_count: usize,
    /// Controlled selected index. When set, external changes reposition the
    /// wheel without animation once the current gesture (if any) ends.
    #[setters(strip_option)]
    pub value: Option<usize>,
    /// Index selected when the wheel is first created.
    pub initial_index: usize,
    /// Height of a single item row.
    pub item_height: Dp,
    /// Number of rows visible in the viewport. Even values are rounded up so
    /// one row sits exactly at the center.
    pub visible_count: usize,
    /// Whether the wheel wraps around past its first and last item.
    pub looping: bool,
    /// Whether user interaction is enabled.
    pub enabled: bool,
    /// Smoothing factor for the settle animation.
    pub scroll_smoothing: f32,
    /// Callback invoked with the newly selected index after a commit.
    #[setters(skip)]
    pub on_change: CallbackWith<usize>,
    /// Optional accessibility label announced by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Optional accessibility value describing the selected item.
    #[setters(strip_option, into)]
    pub accessibility_value: Option<String>,
}

impl WheelArgs {
    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<usize>>) -> Self {
        self.on_change = on_change.into();
        self
    }
}

impl Default for WheelArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new(),
            item_count: 0,
            value: None,
            initial_index: 0,
            item_height: DEFAULT_ITEM_HEIGHT,
            visible_count: DEFAULT_VISIBLE_COUNT,
            looping: false,
            enabled: true,
            scroll_smoothing: DEFAULT_SCROLL_SMOOTHING,
            on_change: CallbackWith::new(|_| {}),
            accessibility_label: None,
            accessibility_value: None,
        }
    }
}

/// Controller for wheel selectors.
///
/// Holds the committed index plus the transient gesture state: the scroll
/// offset, the settle deadline armed by scroll and release events, and the
/// wheel's keyboard focus. During a gesture the visual offset may disagree
/// with [`WheelController::selected_index`] until the wheel settles.
pub struct WheelController {
    committed_index: usize,
    item_count: usize,
    visible_count: usize,
    item_height: Px,
    looping: bool,
    scroll_offset: f32,
    target_offset: f32,
    last_frame_time: Option<Instant>,
    settle_deadline: Option<Instant>,
    is_dragging: bool,
    drag_travel: f32,
    last_drag_position: Option<PxPosition>,
    pending_change: Option<usize>,
    synced_value: Option<usize>,
    focus: Focus,
    initialized: bool,
}

impl WheelController {
    /// Creates a new controller with the requested initial index.
    pub fn new(initial_index: usize) -> Self {
        Self {
            committed_index: initial_index,
            item_count: 0,
            visible_count: DEFAULT_VISIBLE_COUNT,
            item_height: Px::ZERO,
            looping: false,
            scroll_offset: 0.0,
            target_offset: 0.0,
            last_frame_time: None,
            settle_deadline: None,
            is_dragging: false,
            drag_travel: 0.0,
            last_drag_position: None,
            pending_change: None,
            synced_value: None,
            focus: Focus::new(),
            initialized: false,
        }
    }

    /// Returns the committed selected index.
    pub fn selected_index(&self) -> usize {
        self.committed_index
    }

    /// Returns the number of items the wheel currently holds.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if the wheel currently has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Returns `true` once the offset rests on the committed index with no
    /// gesture or settle pending.
    pub fn is_settled(&self) -> bool {
        !self.is_dragging
            && self.settle_deadline.is_none()
            && (self.target_offset - self.scroll_offset).abs() < 0.5
    }

    /// Commits `index` and animates the wheel into place.
    ///
    /// This is the user-style commit: `change` is reported when the index
    /// differs from the previously committed one.
    pub fn select(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        let index = index.min(self.item_count - 1);
        let slot = self.slot_for_index_near(index);
        self.commit(index);
        self.target_offset = self.offset_for_slot(slot);
        self.settle_deadline = None;
    }

    /// Repositions the wheel on `index` immediately, without animation and
    /// without reporting a change.
    pub fn jump_to_index(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        let index = index.min(self.item_count - 1);
        self.committed_index = index;
        let offset = self.offset_for_slot(self.rest_slot(index));
        self.scroll_offset = offset;
        self.target_offset = offset;
        self.settle_deadline = None;
    }

    /// Animates the wheel toward `index` without reporting a change.
    pub fn scroll_to_index(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        let index = index.min(self.item_count - 1);
        let slot = self.slot_for_index_near(index);
        self.committed_index = index;
        self.target_offset = self.offset_for_slot(slot);
        self.settle_deadline = None;
    }

    fn update_layout(
        &mut self,
        item_height: Px,
        item_count: usize,
        visible_count: usize,
        looping: bool,
    ) {
        let size_changed = item_height != self.item_height;
        let mode_changed = looping != self.looping;
        let count_changed = item_count != self.item_count;
        self.item_height = item_height;
        self.item_count = item_count;
        self.visible_count = visible_count;
        self.looping = looping;

        if item_count == 0 {
            self.committed_index = 0;
            self.scroll_offset = 0.0;
            self.target_offset = 0.0;
            self.settle_deadline = None;
            return;
        }
        if self.committed_index >= item_count {
            self.committed_index = item_count - 1;
        }

        if item_height > Px::ZERO
            && (!self.initialized || size_changed || mode_changed || count_changed)
        {
            let offset = self.offset_for_slot(self.rest_slot(self.committed_index));
            self.scroll_offset = offset;
            self.target_offset = offset;
            self.initialized = true;
        }
    }

    /// Applies an externally controlled value.
    ///
    /// Repositions without animation and without reporting a change, but only
    /// between gestures; a change arriving mid-gesture is retried on the next
    /// build.
    fn sync_value(&mut self, value: usize) {
        if self.item_count == 0 {
            return;
        }
        let value = value.min(self.item_count - 1);
        if self.synced_value == Some(value) {
            return;
        }
        if self.is_dragging || self.settle_deadline.is_some() {
            return;
        }
        self.synced_value = Some(value);
        if value == self.committed_index {
            return;
        }
        self.jump_to_index(value);
    }

    /// Advances the settle animation and resolves a due settle deadline.
    ///
    /// `now` is injected so settle timing can be driven by a synthetic clock.
    pub fn tick(&mut self, now: Instant, scroll_smoothing: f32) {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return;
        }
        let scroll_smoothing = scroll_smoothing.clamp(0.0, 1.0);

        if !self.is_dragging
            && let Some(deadline) = self.settle_deadline
            && now >= deadline
        {
            self.settle_deadline = None;
            let (slot, index) = self.resolve_slot(self.nearest_slot());
            self.commit(index);
            self.target_offset = self.offset_for_slot(slot);
        }

        self.update_scroll_offset(now, scroll_smoothing);
        if self.looping {
            self.renormalize();
        } else {
            self.scroll_offset = self.clamp_offset(self.scroll_offset);
        }
    }

    fn apply_scroll_delta(&mut self, delta: f32, now: Instant) {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return;
        }
        self.shift_offset(delta);
        self.settle_deadline = Some(now + SCROLL_SETTLE_DELAY);
    }

    fn apply_drag_delta(&mut self, delta: f32) {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return;
        }
        self.shift_offset(delta);
    }

    fn shift_offset(&mut self, delta: f32) {
        let offset = self.scroll_offset + delta;
        self.scroll_offset = if self.looping {
            offset
        } else {
            self.clamp_offset(offset)
        };
        self.target_offset = self.scroll_offset;
        if self.looping {
            self.renormalize();
        }
    }

    fn start_drag(&mut self, pos: PxPosition) {
        self.is_dragging = true;
        self.drag_travel = 0.0;
        self.last_drag_position = Some(pos);
        self.settle_deadline = None;
    }

    fn end_drag(&mut self, now: Instant) {
        self.is_dragging = false;
        self.last_drag_position = None;
        self.settle_deadline = Some(now + RELEASE_SETTLE_DELAY);
    }

    fn clear_drag(&mut self) {
        self.is_dragging = false;
        self.last_drag_position = None;
    }

    fn drag_delta(&mut self, pos: PxPosition) -> Option<f32> {
        let last = self.last_drag_position?;
        self.last_drag_position = Some(pos);
        let delta = (pos.y - last.y).to_f32();
        self.drag_travel += delta.abs();
        Some(delta)
    }

    fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    fn was_tap(&self) -> bool {
        self.drag_travel <= TAP_SLOP
    }

    /// Commits the row under a viewport-relative vertical position.
    fn select_at(&mut self, y: Px) {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return;
        }
        let height = self.item_height.to_f32();
        let padding = (self.visible_count / 2) as f32 * height;
        let slot = ((y.to_f32() - padding - self.scroll_offset) / height).floor() as i64;
        let count = self.item_count as i64;
        let index = if self.looping {
            slot.rem_euclid(count) as usize
        } else if (0..count).contains(&slot) {
            slot as usize
        } else {
            return;
        };
        self.commit(index);
        self.target_offset = self.offset_for_slot(slot);
        self.settle_deadline = None;
    }

    /// Moves the committed slot by `delta` rows, wrapping in loop mode and
    /// clamping otherwise.
    fn step_by(&mut self, delta: i64) {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return;
        }
        let count = self.item_count as i64;
        let slot = self.target_slot() + delta;
        let (slot, index) = if self.looping {
            (slot, slot.rem_euclid(count) as usize)
        } else {
            let slot = slot.clamp(0, count - 1);
            (slot, slot as usize)
        };
        self.commit(index);
        self.target_offset = self.offset_for_slot(slot);
        self.settle_deadline = None;
    }

    fn request_focus(&mut self) {
        if !self.focus.is_focused() {
            self.focus.request_focus();
        }
    }

    fn clear_focus(&mut self) {
        self.focus.unfocus();
    }

    fn commit(&mut self, index: usize) {
        if index != self.committed_index {
            self.committed_index = index;
            self.pending_change = Some(index);
        }
    }

    fn take_pending_change(&mut self) -> Option<usize> {
        self.pending_change.take()
    }

    /// Slots whose rows may intersect the viewport, one row of margin beyond.
    fn visible_slots(&self) -> Vec<i64> {
        if self.item_count == 0 || self.item_height <= Px::ZERO {
            return Vec::new();
        }
        let center = self.nearest_slot();
        let reach = (self.visible_count / 2 + 1) as i64;
        if self.looping {
            (center - reach..=center + reach).collect()
        } else {
            let lo = (center - reach).max(0);
            let hi = (center + reach).min(self.item_count as i64 - 1);
            (lo..=hi).collect()
        }
    }

    /// The slot currently presenting the committed index.
    fn selected_slot(&self) -> i64 {
        self.slot_for_index_near(self.committed_index)
    }

    fn rest_slot(&self, index: usize) -> i64 {
        if self.looping {
            (self.item_count + index) as i64
        } else {
            index as i64
        }
    }

    /// Nearest slot congruent to `index`, minimizing travel from the current
    /// target.
    fn slot_for_index_near(&self, index: usize) -> i64 {
        if !self.looping {
            return index as i64;
        }
        let count = self.item_count as i64;
        let current = self.target_slot();
        let base = current - current.rem_euclid(count);
        let mut best = base + index as i64;
        for candidate in [best - count, best + count] {
            if (candidate - current).abs() < (best - current).abs() {
                best = candidate;
            }
        }
        best
    }

    fn nearest_slot(&self) -> i64 {
        let height = self.item_height.to_f32();
        if height <= f32::EPSILON {
            return 0;
        }
        let slot = (-self.scroll_offset / height).round();
        if slot.is_finite() { slot as i64 } else { 0 }
    }

    fn target_slot(&self) -> i64 {
        let height = self.item_height.to_f32();
        if height <= f32::EPSILON {
            return 0;
        }
        let slot = (-self.target_offset / height).round();
        if slot.is_finite() { slot as i64 } else { 0 }
    }

    fn resolve_slot(&self, slot: i64) -> (i64, usize) {
        let count = self.item_count as i64;
        if self.looping {
            (slot, slot.rem_euclid(count) as usize)
        } else {
            let slot = slot.clamp(0, count - 1);
            (slot, slot as usize)
        }
    }

    fn offset_for_slot(&self, slot: i64) -> f32 {
        -(self.item_height.to_f32() * slot as f32)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        if self.item_count <= 1 || self.item_height <= Px::ZERO {
            return 0.0;
        }
        let min_offset = -(self.item_height.to_f32() * (self.item_count - 1) as f32);
        offset.clamp(min_offset, 0.0)
    }

    /// Shifts offset and target back into the middle item set together, so
    /// looping never visibly runs out of rows.
    fn renormalize(&mut self) {
        let span = self.item_height.to_f32() * self.item_count as f32;
        if span <= f32::EPSILON {
            return;
        }
        while -self.scroll_offset >= span * 2.0 {
            self.scroll_offset += span;
            self.target_offset += span;
        }
        while -self.scroll_offset < span {
            self.scroll_offset -= span;
            self.target_offset -= span;
        }
    }

    fn update_scroll_offset(&mut self, now: Instant, smoothing: f32) {
        let delta_time = if let Some(last) = self.last_frame_time {
            now.duration_since(last).as_secs_f32()
        } else {
            1.0 / 60.0
        };
        self.last_frame_time = Some(now);

        let diff = self.target_offset - self.scroll_offset;
        if diff.abs() < 0.5 {
            self.scroll_offset = self.target_offset;
            return;
        }

        let mut movement_factor = (1.0 - smoothing) * delta_time * 60.0;
        if movement_factor > 1.0 {
            movement_factor = 1.0;
        }

        self.scroll_offset += diff * movement_factor;
    }

    fn scroll_offset_px(&self) -> Px {
        Px::saturating_from_f32(self.scroll_offset)
    }
}

impl Default for WheelController {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Clone)]
struct WheelLayout {
    item_height: Px,
    visible_count: usize,
    visible_slots: Vec<i64>,
    scroll_offset: Px,
    controller: State<WheelController>,
}

impl PartialEq for WheelLayout {
    fn eq(&self, other: &Self) -> bool {
        self.item_height == other.item_height
            && self.visible_count == other.visible_count
            && self.visible_slots == other.visible_slots
            && self.scroll_offset == other.scroll_offset
    }
}

impl LayoutSpec for WheelLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        if input.children_ids().len() != self.visible_slots.len() {
            return Err(MeasurementError::MeasureFnFailed(
                "Wheel measured child count mismatch".into(),
            ));
        }

        let parent = input.parent_constraint();
        let viewport_height = px_mul(self.item_height, self.visible_count as i64);

        let child_constraint = Constraint::new(
            DimensionValue::Wrap {
                min: None,
                max: parent.width().get_max(),
            },
            DimensionValue::Fixed(self.item_height),
        );
        let children_to_measure: Vec<_> = input
            .children_ids()
            .iter()
            .map(|&child_id| (child_id, child_constraint))
            .collect();
        let measurements = input.measure_children(children_to_measure)?;

        let mut max_width = Px::ZERO;
        for size in measurements.values() {
            max_width = max_width.max(size.width);
        }
        let container_width = resolve_dimension(parent.width(), max_width, "wheel width");

        let scroll_offset = self.controller.with(|c| c.scroll_offset_px());
        let padding = px_mul(self.item_height, (self.visible_count / 2) as i64);

        for (&child_id, &slot) in input.children_ids().iter().zip(self.visible_slots.iter()) {
            let measured = measurements
                .get(&child_id)
                .copied()
                .unwrap_or(ComputedData::ZERO);
            let x = (container_width - measured.width).max(Px::ZERO) / 2;
            let y = padding + px_mul(self.item_height, slot) + scroll_offset;
            output.place_child(child_id, PxPosition::new(x, y));
        }

        Ok(ComputedData {
            width: container_width,
            height: viewport_height,
        })
    }

    fn record(&self, input: &RenderInput<'_>) {
        input.metadata_mut().clips_children = true;
    }
}

fn clamp_wrap(min: Option<Px>, max: Option<Px>, measure: Px) -> Px {
    min.unwrap_or(Px(0))
        .max(measure)
        .min(max.unwrap_or(Px::MAX))
}

fn fill_value(min: Option<Px>, max: Option<Px>, measure: Px, context: &str) -> Px {
    let Some(max) = max else {
        panic!("Wheel cannot fill an unbounded {context}");
    };
    let mut value = max.max(measure);
    if let Some(min) = min {
        value = value.max(min);
    }
    value
}

fn resolve_dimension(dim: DimensionValue, measure: Px, context: &str) -> Px {
    match dim {
        DimensionValue::Fixed(v) => v,
        DimensionValue::Wrap { min, max } => clamp_wrap(min, max, measure),
        DimensionValue::Fill { min, max } => fill_value(min, max, measure, context),
    }
}

fn px_mul(px: Px, times: i64) -> Px {
    px_from_i64(px.0 as i64 * times)
}

fn px_from_i64(value: i64) -> Px {
    if value > i64::from(i32::MAX) {
        Px(i32::MAX)
    } else if value < i64::from(i32::MIN) {
        Px(i32::MIN)
    } else {
        Px(value as i32)
    }
}

fn sanitize_item_height(height: Dp) -> Px {
    let px = Px::from(height);
    if px > Px::ZERO {
        px
    } else {
        DEFAULT_ITEM_HEIGHT.into()
    }
}

fn sanitize_visible_count(count: usize) -> usize {
    if count == 0 {
        warn_visible_count(count);
        return DEFAULT_VISIBLE_COUNT;
    }
    if count % 2 == 0 {
        warn_visible_count(count);
        return count + 1;
    }
    count
}

fn warn_visible_count(count: usize) {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| {
        tracing::warn!(
            "wheel visible_count {count} is not a positive odd number, adjusting to keep a center row"
        );
    });
}

/// # wheel
///
/// Renders a scroll-wheel selector that snaps one item into the center row.
///
/// ## Usage
///
/// Pick one value from an ordered list with drag, scroll, tap, or arrow-key
/// input.
///
/// ## Parameters
///
/// - `args` — configures items, sizing, looping, and callbacks; see
///   [`WheelArgs`].
/// - `item_content` — closure that renders each item by index; the flag tells
///   it whether that item is the committed selection.
///
/// ## Examples
///
/// ```
/// use tessera_components::text::text;
/// use tessera_ui::tessera;
/// use tessera_wheel_picker::wheel::{WheelArgs, wheel};
///
/// #[tessera]
/// fn demo() {
///     wheel(
///         WheelArgs::default().item_count(10).initial_index(3),
///         |index, _selected| {
///             text(format!("{index}"));
///         },
///     );
/// }
///
/// demo();
/// ```
#[tessera]
pub fn wheel(args: WheelArgs, item_content: impl Fn(usize, bool) + Send + Sync + 'static) {
    let initial_index = args.value.unwrap_or(args.initial_index);
    let controller = remember(move || WheelController::new(initial_index));
    wheel_with_controller(args, controller, item_content);
}

/// # wheel_with_controller
///
/// Wheel selector variant that is driven by an explicit controller.
///
/// ## Usage
///
/// Use when you need to read the committed index or drive the wheel
/// programmatically.
///
/// ## Parameters
///
/// - `args` — configures items, sizing, looping, and callbacks; see
///   [`WheelArgs`].
/// - `controller` — a [`WheelController`] that tracks the committed index and
///   gesture state.
/// - `item_content` — closure that renders each item by index; the flag tells
///   it whether that item is the committed selection.
///
/// ## Examples
///
/// ```
/// use tessera_components::text::text;
/// use tessera_ui::{remember, tessera};
/// use tessera_wheel_picker::wheel::{WheelArgs, WheelController, wheel_with_controller};
///
/// #[tessera]
/// fn demo() {
///     let controller = remember(|| WheelController::new(2));
///     wheel_with_controller(
///         WheelArgs::default().item_count(10),
///         controller,
///         |index, _selected| {
///             text(format!("{index}"));
///         },
///     );
///
///     assert_eq!(controller.with(|wheel| wheel.selected_index()), 2);
/// }
///
/// demo();
/// ```
#[tessera]
pub fn wheel_with_controller(
    args: WheelArgs,
    controller: State<WheelController>,
    item_content: impl Fn(usize, bool) + Send + Sync + 'static,
) {
    let mut semantics = SemanticsArgs::new().role(Role::ListBox);
    if let Some(label) = args.accessibility_label.clone() {
        semantics = semantics.label(label);
    }
    if let Some(value) = args.accessibility_value.clone() {
        semantics = semantics.value(value);
    }
    semantics = if args.enabled {
        semantics.focusable(true)
    } else {
        semantics.disabled(true)
    };
    let modifier = args.modifier.semantics(semantics);
    modifier.run(move || wheel_inner(args, controller, item_content));
}

#[tessera]
fn wheel_inner(
    args: WheelArgs,
    controller: State<WheelController>,
    item_content: impl Fn(usize, bool) + Send + Sync + 'static,
) {
    let item_height = sanitize_item_height(args.item_height);
    let visible_count = sanitize_visible_count(args.visible_count);
    let looping = args.looping;
    let item_count = args.item_count;

    controller.with_mut(|c| c.update_layout(item_height, item_count, visible_count, looping));
    if let Some(value) = args.value {
        controller.with_mut(|c| c.sync_value(value));
    }
    controller.with_mut(|c| c.tick(Instant::now(), args.scroll_smoothing));
    if let Some(index) = controller.with_mut(|c| c.take_pending_change()) {
        args.on_change.call(index);
    }

    let visible_slots = controller.with(|c| c.visible_slots());
    let selected_slot = controller.with(|c| c.selected_slot());
    let scroll_offset = controller.with(|c| c.scroll_offset_px());
    layout(WheelLayout {
        item_height,
        visible_count,
        visible_slots: visible_slots.clone(),
        scroll_offset,
        controller,
    });

    let enabled = args.enabled;
    input_handler(move |input| {
        if !enabled {
            controller.with_mut(|c| c.clear_focus());
            return;
        }

        let is_cursor_in_component = input
            .cursor_position_rel
            .map(|pos| is_position_in_component(input.computed_data, pos))
            .unwrap_or(false);
        let is_dragging = controller.with(|c| c.is_dragging());
        let now = Instant::now();

        if is_cursor_in_component || is_dragging {
            if !is_dragging {
                let mut scroll_delta = 0.0;
                for event in input.cursor_events.iter() {
                    if let CursorEventContent::Scroll(scroll_event) = &event.content {
                        let delta = scroll_event.delta_y;
                        if delta.abs() >= 0.01 {
                            scroll_delta += delta;
                        }
                    }
                }
                if scroll_delta.abs() >= 0.01 {
                    controller.with_mut(|c| c.apply_scroll_delta(scroll_delta, now));
                    input
                        .cursor_events
                        .retain(|event| !matches!(event.content, CursorEventContent::Scroll(_)));
                }
            }

            let mut drag_start_pos = None;
            let mut should_end_drag = false;
            for event in input.cursor_events.iter() {
                match &event.content {
                    CursorEventContent::Pressed(PressKeyEventType::Left) => {
                        if is_cursor_in_component {
                            drag_start_pos = input.cursor_position_rel;
                        }
                    }
                    CursorEventContent::Released(PressKeyEventType::Left) => {
                        should_end_drag = true;
                    }
                    _ => {}
                }
            }

            controller.with_mut(|c| {
                if let Some(pos) = drag_start_pos {
                    c.request_focus();
                    c.start_drag(pos);
                }
                if c.is_dragging()
                    && let Some(pos) = input.cursor_position_rel
                    && let Some(delta) = c.drag_delta(pos)
                {
                    c.apply_drag_delta(delta);
                }
                if should_end_drag && c.is_dragging() {
                    if c.was_tap() && let Some(pos) = input.cursor_position_rel {
                        c.select_at(pos.y);
                        c.clear_drag();
                    } else {
                        c.end_drag(now);
                    }
                }
            });
        }

        if controller.with(|c| c.is_focused()) && !input.keyboard_events.is_empty() {
            controller.with_mut(|c| {
                let page = c.visible_count as i64;
                for event in input.keyboard_events.iter() {
                    if event.state != winit::event::ElementState::Pressed {
                        continue;
                    }
                    let winit::keyboard::PhysicalKey::Code(code) = event.physical_key else {
                        continue;
                    };
                    match code {
                        winit::keyboard::KeyCode::ArrowUp => c.step_by(-1),
                        winit::keyboard::KeyCode::ArrowDown => c.step_by(1),
                        winit::keyboard::KeyCode::PageUp => c.step_by(-page),
                        winit::keyboard::KeyCode::PageDown => c.step_by(page),
                        winit::keyboard::KeyCode::Home => c.select(0),
                        winit::keyboard::KeyCode::End => {
                            c.select(c.item_count().saturating_sub(1));
                        }
                        _ => {}
                    }
                }
            });
            input.keyboard_events.clear();
        }
    });

    let item_content = &item_content;
    let count = item_count as i64;
    for slot in visible_slots {
        let index = if looping {
            slot.rem_euclid(count) as usize
        } else {
            slot as usize
        };
        let selected = slot == selected_slot;
        key(slot, || {
            item_content(index, selected);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_HEIGHT: Px = Px(40);

    fn controller(item_count: usize, looping: bool) -> WheelController {
        let mut c = WheelController::new(0);
        c.update_layout(ITEM_HEIGHT, item_count, 5, looping);
        c
    }

    fn run_until_settled(c: &mut WheelController, mut now: Instant) -> Instant {
        for _ in 0..120 {
            now += Duration::from_millis(16);
            c.tick(now, DEFAULT_SCROLL_SMOOTHING);
        }
        now
    }

    fn drag(c: &mut WheelController, from: i32, to: i32) {
        c.start_drag(PxPosition::new(Px(0), Px(from)));
        let delta = c.drag_delta(PxPosition::new(Px(0), Px(to))).unwrap();
        c.apply_drag_delta(delta);
    }

    #[test]
    fn drag_release_settles_on_one_index() {
        let mut c = controller(10, false);
        let now = Instant::now();

        // Finger moves up 63px: two and a bit rows forward.
        drag(&mut c, 100, 37);
        c.end_drag(now);
        run_until_settled(&mut c, now);

        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.take_pending_change(), Some(2));
        assert_eq!(c.take_pending_change(), None);
        assert!(c.is_settled());
        assert_eq!(c.scroll_offset, -80.0);
    }

    #[test]
    fn scroll_settles_only_after_idle_delay() {
        let mut c = controller(10, false);
        let now = Instant::now();

        c.apply_scroll_delta(-70.0, now);
        c.tick(now + Duration::from_millis(50), DEFAULT_SCROLL_SMOOTHING);
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.take_pending_change(), None);

        run_until_settled(&mut c, now);
        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.take_pending_change(), Some(2));
    }

    #[test]
    fn rearming_scroll_defers_the_settle() {
        let mut c = controller(10, false);
        let now = Instant::now();

        c.apply_scroll_delta(-30.0, now);
        let later = now + Duration::from_millis(80);
        c.apply_scroll_delta(-30.0, later);
        // The first deadline has passed, but the rearm moved it.
        c.tick(now + Duration::from_millis(120), DEFAULT_SCROLL_SMOOTHING);
        assert_eq!(c.take_pending_change(), None);

        run_until_settled(&mut c, later);
        assert_eq!(c.selected_index(), 2);
    }

    #[test]
    fn settling_back_to_same_index_reports_nothing() {
        let mut c = controller(10, false);
        let now = Instant::now();

        c.apply_scroll_delta(-10.0, now);
        run_until_settled(&mut c, now);

        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.take_pending_change(), None);
        assert_eq!(c.scroll_offset, 0.0);
    }

    #[test]
    fn offsets_clamp_at_the_ends() {
        let mut c = controller(3, false);
        let now = Instant::now();

        c.apply_scroll_delta(500.0, now);
        assert_eq!(c.scroll_offset, 0.0);
        c.apply_scroll_delta(-500.0, now);
        assert_eq!(c.scroll_offset, -80.0);

        run_until_settled(&mut c, now);
        assert_eq!(c.selected_index(), 2);
    }

    #[test]
    fn looping_wraps_the_emitted_index() {
        let mut c = controller(10, true);
        let now = Instant::now();

        // One full revolution forward lands back on item 0.
        c.apply_scroll_delta(-400.0, now);
        run_until_settled(&mut c, now);
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.take_pending_change(), None);

        c.apply_scroll_delta(-40.0, now + Duration::from_secs(10));
        run_until_settled(&mut c, now + Duration::from_secs(10));
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.take_pending_change(), Some(1));
    }

    #[test]
    fn looping_steps_wrap_around() {
        let mut c = controller(10, true);

        for _ in 0..10 {
            c.step_by(1);
        }
        assert_eq!(c.selected_index(), 0);

        c.step_by(-1);
        assert_eq!(c.selected_index(), 9);
        c.step_by(1);
        assert_eq!(c.selected_index(), 0);
    }

    #[test]
    fn non_looping_steps_clamp() {
        let mut c = controller(10, false);

        c.step_by(-1);
        assert_eq!(c.selected_index(), 0);

        c.step_by(25);
        assert_eq!(c.selected_index(), 9);
        c.step_by(1);
        assert_eq!(c.selected_index(), 9);

        c.step_by(-5);
        assert_eq!(c.selected_index(), 4);
    }

    #[test]
    fn home_and_end_are_absolute() {
        for looping in [false, true] {
            let mut c = controller(10, looping);
            c.select(7);
            c.take_pending_change();

            c.select(0);
            assert_eq!(c.selected_index(), 0);
            assert_eq!(c.take_pending_change(), Some(0));

            c.select(9);
            assert_eq!(c.selected_index(), 9);
            assert_eq!(c.take_pending_change(), Some(9));
        }
    }

    #[test]
    fn renormalization_keeps_the_offset_in_the_middle_set() {
        let mut c = controller(10, true);
        let span = 400.0;
        let now = Instant::now();

        c.apply_scroll_delta(-3975.0, now);
        let position = -c.scroll_offset;
        assert!((span..span * 2.0).contains(&position));

        c.apply_scroll_delta(5000.0, now);
        let position = -c.scroll_offset;
        assert!((span..span * 2.0).contains(&position));
    }

    #[test]
    fn controlled_sync_repositions_without_reporting() {
        let mut c = controller(10, false);

        c.sync_value(5);
        assert_eq!(c.selected_index(), 5);
        assert_eq!(c.take_pending_change(), None);
        assert_eq!(c.scroll_offset, -200.0);
        assert!(c.is_settled());
    }

    #[test]
    fn controlled_sync_waits_for_the_gesture_to_end() {
        let mut c = controller(10, false);
        let now = Instant::now();

        drag(&mut c, 100, 80);
        c.sync_value(5);
        assert_eq!(c.selected_index(), 0);

        c.end_drag(now);
        run_until_settled(&mut c, now);
        c.take_pending_change();

        // Retried on a later build once the wheel is idle again.
        c.sync_value(5);
        assert_eq!(c.selected_index(), 5);
        assert_eq!(c.take_pending_change(), None);
    }

    #[test]
    fn echoed_sync_after_a_commit_does_not_jump() {
        let mut c = controller(10, false);
        let now = Instant::now();

        c.sync_value(3);
        c.apply_scroll_delta(-80.0, now);
        run_until_settled(&mut c, now);
        assert_eq!(c.selected_index(), 5);
        assert_eq!(c.take_pending_change(), Some(5));

        let offset = c.scroll_offset;
        c.sync_value(5);
        assert_eq!(c.scroll_offset, offset);
        assert_eq!(c.take_pending_change(), None);
    }

    #[test]
    fn tap_commits_the_touched_row() {
        let mut c = controller(10, false);

        // Viewport rows: 5 visible, 40px each, selection row starts at 80px.
        c.start_drag(PxPosition::new(Px(0), Px(165)));
        assert!(c.was_tap());
        c.select_at(Px(165));
        c.clear_drag();

        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.take_pending_change(), Some(2));
    }

    #[test]
    fn tap_outside_the_items_is_ignored() {
        let mut c = controller(2, false);

        c.select_at(Px(190));
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.take_pending_change(), None);
    }

    #[test]
    fn drag_beyond_the_slop_is_not_a_tap() {
        let mut c = controller(10, false);

        drag(&mut c, 100, 90);
        assert!(!c.was_tap());
    }

    #[test]
    fn programmatic_moves_do_not_report() {
        let mut c = controller(10, false);
        let now = Instant::now();

        c.jump_to_index(4);
        assert_eq!(c.selected_index(), 4);
        assert_eq!(c.take_pending_change(), None);
        assert!(c.is_settled());

        c.scroll_to_index(7);
        assert_eq!(c.selected_index(), 7);
        assert_eq!(c.take_pending_change(), None);
        run_until_settled(&mut c, now);
        assert_eq!(c.scroll_offset, -280.0);
    }

    #[test]
    fn select_reports_a_change_once() {
        let mut c = controller(10, false);

        c.select(6);
        assert_eq!(c.take_pending_change(), Some(6));
        c.select(6);
        assert_eq!(c.take_pending_change(), None);
    }

    #[test]
    fn empty_wheel_ignores_interaction() {
        let mut c = controller(0, false);
        let now = Instant::now();

        c.apply_scroll_delta(-100.0, now);
        c.step_by(1);
        c.select_at(Px(100));
        c.tick(now, DEFAULT_SCROLL_SMOOTHING);

        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.take_pending_change(), None);
    }

    #[test]
    fn visible_slots_track_the_offset() {
        let mut c = controller(10, false);

        assert_eq!(c.visible_slots(), vec![0, 1, 2, 3]);

        c.jump_to_index(5);
        assert_eq!(c.visible_slots(), vec![2, 3, 4, 5, 6, 7, 8]);

        c.jump_to_index(9);
        assert_eq!(c.visible_slots(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn looping_visible_slots_cover_the_wrap_seam() {
        let mut c = controller(3, true);

        // Committed 0 rests on slot 3 of the tripled space.
        assert_eq!(c.visible_slots(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(c.selected_slot(), 3);
    }

    #[test]
    fn shrinking_domains_clamp_the_committed_index() {
        let mut c = controller(10, false);
        c.select(9);
        c.take_pending_change();

        c.update_layout(ITEM_HEIGHT, 4, 5, false);
        assert_eq!(c.selected_index(), 3);
        assert_eq!(c.scroll_offset, -120.0);
    }
}
