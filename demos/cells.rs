use poisson_point::sample;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

const IMAGE_SIZE: u32 = 1024;

fn main() {
    let seed = 7;

    let square_size = (IMAGE_SIZE as f64 / 2f64.sqrt()) as i32;
    let square_start = (IMAGE_SIZE as i32 - square_size) / 2;
    let min_distance = (IMAGE_SIZE as f64 * 0.5 * 0.02) as i32;

    let points = sample(seed, min_distance, square_size).unwrap();
    println!("connecting {} points", points.len());

    let mut pixmap = Pixmap::new(IMAGE_SIZE, IMAGE_SIZE).unwrap();
    pixmap.fill(tiny_skia::Color::WHITE);

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = true;

    let mut stroke = Stroke::default();
    stroke.width = IMAGE_SIZE as f32 * 0.5 * 0.003;

    // each point is joined to its nearest neighbour, forming a cell web
    for point in &points {
        let nearest = points
            .iter()
            .filter(|other| *other != point)
            .min_by(|a, b| {
                point
                    .distance_squared(a)
                    .cmp(&point.distance_squared(b))
            });
        let Some(nearest) = nearest else {
            continue;
        };

        let start = point.offset(square_start, square_start);
        let end = nearest.offset(square_start, square_start);

        let mut pb = PathBuilder::new();
        pb.move_to(start.x as f32, start.y as f32);
        pb.line_to(end.x as f32, end.y as f32);
        let Some(path) = pb.finish() else {
            continue;
        };

        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    std::fs::create_dir_all("out").unwrap();
    pixmap.save_png("out/cells.png").unwrap();
}
