use macroquad::prelude::*;
use toroidal_life::{
    Camera, GameState, Layout, Settings,
    input, rendering,
};

fn window_conf() -> Conf {
    let layout = Layout::from_settings(&Settings::default());
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: layout.window_width() as i32,
        window_height: layout.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::default();
    let layout = Layout::from_settings(&settings);
    let mut state = match GameState::new(&settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            return;
        }
    };
    let mut camera = Camera::new();
    let buttons = layout.create_buttons();
    let frame_time = 1.0 / settings.target_fps.max(1) as f64;

    log::info!(
        "window {}x{}, tile {}px, 1 generation per {} frames",
        layout.window_width(),
        layout.window_height(),
        settings.tile_size,
        state.frames_per_generation,
    );

    loop {
        let frame_start = get_time();
        let mouse_pos = mouse_position();

        // Input: commands first, then edits
        for command in input::pressed_commands(&buttons, mouse_pos) {
            state = state.apply(command);
        }
        input::handle_zoom(&mut camera);
        input::handle_mouse_paint(&mut state, &camera, &layout, mouse_pos);
        input::handle_pattern_keys(&mut state, &camera, &layout, mouse_pos);

        // Update game state
        state = state.tick();

        // Render
        clear_background(BLACK);
        rendering::draw_cells(&state.simulation, &camera, &layout, state.color_mode);
        if state.show_grid {
            rendering::draw_grid_lines(&state.simulation, &camera, &layout);
        }
        rendering::draw_controls(&state, &camera, &layout, &buttons, mouse_pos);

        // Frame cadence drives generation pacing, so cap the frame rate
        let elapsed = get_time() - frame_start;
        if elapsed < frame_time {
            std::thread::sleep(std::time::Duration::from_secs_f64(frame_time - elapsed));
        }

        next_frame().await;
    }
}
