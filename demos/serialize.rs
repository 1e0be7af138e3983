use std::fs::File;

use poisson_point::{Point, SampleParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = SampleParameters::new(99, 12, 400)?;
    let points = params.sample();
    println!("sampled {} points", points.len());

    std::fs::create_dir_all("out")?;
    serde_cbor::to_writer(File::create("out/points.cbor")?, &(params, &points))?;

    let (restored_params, restored): (SampleParameters, Vec<Point>) =
        serde_cbor::from_reader(File::open("out/points.cbor")?)?;

    assert_eq!(restored_params, params);
    assert_eq!(restored, points);
    println!("round-trip ok");

    Ok(())
}
