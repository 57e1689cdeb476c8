use bsp_dungeon::{room_at, Dungeon, DungeonConfig};
use dungeon_viz::{draw_corridors, draw_grid, MapLayout, RenderVisitor, TreeNavigator};
use macroquad::prelude::*;

const MARGIN: f32 = 10.0;
const HEADER: f32 = 150.0;

fn generate(config: &DungeonConfig) -> Dungeon {
    match Dungeon::generate(config) {
        Ok(dungeon) => dungeon,
        Err(err) => panic!("default viewer configuration rejected: {err}"),
    }
}

#[macroquad::main("BSP Dungeon")]
async fn main() {
    let mut config = DungeonConfig::default();
    let mut dungeon = generate(&config);
    println!("Generated dungeon: {}", dungeon.stats());

    let mut navigator = TreeNavigator::new();
    let mut show_partitions = true;
    let mut show_corridors = false;

    loop {
        if is_key_pressed(KeyCode::Space) {
            // Step to the next seed so every layout can be revisited.
            let seed = dungeon.stats().seed.unwrap_or(0).wrapping_add(1);
            config = config.with_seed(seed);
            dungeon = generate(&config);
            navigator.clamp_to(dungeon.tree());
            println!("Generated dungeon: {}", dungeon.stats());
        }
        if is_key_pressed(KeyCode::G) {
            show_partitions = !show_partitions;
        }
        if is_key_pressed(KeyCode::C) {
            show_corridors = !show_corridors;
        }
        navigator.update(dungeon.tree());

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let layout = MapLayout::fit(
            dungeon.grid(),
            vec2(MARGIN, HEADER),
            vec2(screen_width() - 2.0 * MARGIN, screen_height() - HEADER - MARGIN),
        );

        draw_grid(dungeon.grid(), &layout);
        if show_partitions {
            dungeon.tree().walk_leaves(&mut RenderVisitor { layout: &layout });
        }
        if show_corridors {
            draw_corridors(dungeon.corridors(), &layout);
        }
        navigator.render(dungeon.tree(), &layout);

        let stats = dungeon.stats();
        draw_text(
            &format!(
                "BSP Dungeon - seed {} | {} rooms, {} corridors",
                stats.seed.unwrap_or_default(),
                stats.rooms,
                stats.corridors
            ),
            MARGIN,
            25.0,
            20.0,
            WHITE,
        );

        navigator.draw_ui(dungeon.tree(), dungeon.rooms(), MARGIN, 50.0);

        let (mx, my) = mouse_position();
        let hover = match layout.cell_at(dungeon.grid(), vec2(mx, my)) {
            Some(cell) => match room_at(dungeon.rooms(), cell) {
                Some(id) => format!("Cell ({}, {}) in room #{}", cell.x, cell.y, id.0),
                None => format!("Cell ({}, {})", cell.x, cell.y),
            },
            None => String::new(),
        };
        draw_text(
            &format!("[Space] new seed | [G] partitions | [C] corridors   {hover}"),
            MARGIN,
            135.0,
            16.0,
            DARKGRAY,
        );

        next_frame().await
    }
}
