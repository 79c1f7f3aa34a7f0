//! Benchmarks for passage rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze2twine::render::{fill, FILL_WIDTH};
use maze2twine::{Config, Document, Room, RoomRenderer, RoomTypeIndex};

/// A square grid maze where each room links to its right and lower neighbour.
fn grid_maze(side: u32) -> Document {
    let mut rooms = Vec::new();

    for row in 0..side {
        for col in 0..side {
            let number = row * side + col + 1;
            let kind = if (row + col) % 3 == 0 { "cave" } else { "hall" };
            let mut room = Room::new(
                number,
                kind,
                format!("Room {} of the grid.", number),
                "A plain room with plain walls.\n\nExits lead onward.",
            );
            if col + 1 < side {
                room = room.with_link(number + 1, "300,40,380,40,380,210,300,210");
            }
            if row + 1 < side {
                room = room.with_link(number + side, "40,200,340,200,340,240,40,240");
            }
            rooms.push(room);
        }
    }

    Document::new(rooms)
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let document = grid_maze(10);
    let config = Config::default();

    group.bench_function("build_index", |b| {
        b.iter(|| RoomTypeIndex::build(black_box(&document.rooms)))
    });

    let index = RoomTypeIndex::build(&document.rooms);
    let renderer = RoomRenderer::new(&index, &config);

    group.bench_function("render_room", |b| {
        b.iter(|| renderer.render(black_box(&document.rooms[11])).unwrap())
    });

    group.bench_function("render_maze_100", |b| {
        b.iter(|| {
            for room in &document.rooms {
                black_box(renderer.render(room).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let paragraph = "The corridor bends left and the air grows colder. ".repeat(40);

    c.bench_function("fill_paragraph", |b| {
        b.iter(|| fill(black_box(&paragraph), FILL_WIDTH))
    });
}

criterion_group!(benches, bench_rendering, bench_fill);
criterion_main!(benches);
