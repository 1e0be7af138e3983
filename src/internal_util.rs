use crate::Point;

pub fn square_distance(p1: &Point, p2: &Point) -> i64 {
    let dx = p1.x as i64 - p2.x as i64;
    let dy = p1.y as i64 - p2.y as i64;
    dx * dx + dy * dy
}
