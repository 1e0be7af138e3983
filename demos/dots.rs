use poisson_point::sample;
use rand::{rngs::StdRng, Rng, SeedableRng};

const IMAGE_SIZE: u32 = 1024;

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> image::Rgb<u8> {
    let h = (h.fract() + 1.0).fract() * 6.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    image::Rgb([
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ])
}

fn stretch(rng: &mut StdRng, radius: i32) -> i32 {
    let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    (sign * (radius as f64 * 0.2 + rng.gen_range(0..radius) as f64 * 0.4)) as i32
}

fn fill_circle(image_buf: &mut image::RgbImage, cx: i32, cy: i32, radius: i32, color: image::Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px >= 0 && py >= 0 && (px as u32) < IMAGE_SIZE && (py as u32) < IMAGE_SIZE {
                image_buf.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn main() {
    let seed = 12;
    let mut rng = StdRng::seed_from_u64(seed);

    // centered square with the same area as the remaining border
    let square_size = (IMAGE_SIZE as f64 / 2f64.sqrt()) as i32;
    let square_start = (IMAGE_SIZE as i32 - square_size) / 2;
    let min_distance = (IMAGE_SIZE as f64 * 0.5 * 0.07) as i32;
    let dot_radius = min_distance / 2;
    let hue: f32 = rng.gen();
    let black = true;
    let dist_mult = 0.00006;
    let stretch_x = stretch(&mut rng, dot_radius);
    let stretch_y = stretch(&mut rng, dot_radius);

    let mut points = sample(seed, min_distance, square_size).unwrap();
    points.sort_by(|a, b| {
        let ka = 1.0 / (a.x + a.y) as f64;
        let kb = 1.0 / (b.x + b.y) as f64;
        ka.total_cmp(&kb)
    });
    println!("placing {} dots", points.len());

    let mut image_buf =
        image::RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, image::Rgb([255, 255, 255]));

    let reference = poisson_point::Point::new(0, 0);
    for point in &points {
        let color = hsv_to_rgb(
            hue + (point.distance(&reference) * dist_mult) as f32,
            1.0,
            1.0,
        );
        let placed = point.offset(square_start, square_start);
        fill_circle(&mut image_buf, placed.x, placed.y, dot_radius, color);
        if black {
            // a shadow layer of black dots, all pushed the same random way
            fill_circle(
                &mut image_buf,
                placed.x + stretch_x,
                placed.y + stretch_y,
                dot_radius,
                image::Rgb([0, 0, 0]),
            );
        }
    }

    std::fs::create_dir_all("out").unwrap();
    image_buf.save("out/dots.png").unwrap();
}
