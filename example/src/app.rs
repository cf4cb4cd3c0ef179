use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    theme::{MaterialTheme, material_theme},
};
use tessera_ui::{Dp, Modifier, remember, tessera, use_context};
use tessera_wheel_picker::time_picker::{TimePickerArgs, time_picker};

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        home();
    });
}

#[tessera]
fn home() {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let clock = remember(|| "09:30".to_string());
    let persian_clock = remember(|| "11:15 PM".to_string());

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .style(SurfaceStyle::Filled {
                color: scheme.surface,
            })
            .content_alignment(Alignment::Center),
        move || {
            row(
                RowArgs::default()
                    .main_axis_alignment(MainAxisAlignment::Center)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |row_scope| {
                    // 24-hour picker on a five-minute grid.
                    row_scope.child(move || {
                        let value = clock.with(|v| v.clone());
                        time_picker(
                            &TimePickerArgs::default()
                                .value(value)
                                .locale("en")
                                .minute_step(5)
                                .on_change(move |value| {
                                    clock.with_mut(|v| *v = value);
                                }),
                        );
                    });

                    row_scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().width(Dp(48.0))));
                    });

                    // 12-hour Persian picker with wrap-around wheels.
                    row_scope.child(move || {
                        let value = persian_clock.with(|v| v.clone());
                        time_picker(
                            &TimePickerArgs::default()
                                .value(value)
                                .is_12_hour(true)
                                .looping(true)
                                .locale("fa")
                                .on_change(move |value| {
                                    persian_clock.with_mut(|v| *v = value);
                                }),
                        );
                    });
                },
            );
        },
    ));
}
