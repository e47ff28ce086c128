use crate::math::apply;
use crate::sampler::{mean_anomaly_at_frame, OrbitTrack, Scene, SystemTrack};
use std::io::Write;

/// Writes equally long signals as CSV columns, one titled column per signal.
/// Output stops at the end of the shortest signal.
pub fn write_csv<W: Write>(writer: W, signals: &[(&str, &[f64])]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    let titles = signals.iter().map(|s| s.0);

    writer.write_record(titles)?;

    for i in 0.. {
        let iter = signals
            .iter()
            .map(|s| s.1.get(i))
            .map(|s| s.map(|e| format!("{:0.6}", e)))
            .collect::<Option<Vec<_>>>();
        if let Some(row) = iter {
            writer.write_record(row)?;
        } else {
            break;
        }
    }

    writer.flush()?;

    Ok(())
}

/// One row per frame: time (years), mean anomaly, position and radius.
pub fn export_orbit_track<W: Write>(track: &OrbitTrack, writer: W) -> Result<(), csv::Error> {
    let n = track.frame_count();
    let frames: Vec<usize> = (0..n).collect();

    let t = apply(&frames, |f| track.period() * f as f64 / n as f64);
    let m = apply(&frames, |f| mean_anomaly_at_frame(f, n));
    let x = apply(&track.frames, |p| p.x);
    let y = apply(&track.frames, |p| p.y);
    let r = apply(&track.frames, |p| p.length());

    write_csv(
        writer,
        &[
            ("t", &t),
            ("mean_anomaly", &m),
            ("x", &x),
            ("y", &y),
            ("r", &r),
        ],
    )
}

/// One row per frame, time in reference periods, then x and y per body.
pub fn export_system_track<W: Write>(track: &SystemTrack, writer: W) -> Result<(), csv::Error> {
    let n = track.frame_count;
    let t: Vec<f64> = (0..n).map(|f| f as f64 / n as f64).collect();

    let columns: Vec<(String, Vec<f64>)> = track
        .bodies
        .iter()
        .flat_map(|b| {
            [
                (format!("{}_x", b.label()), apply(&b.frames, |p| p.x)),
                (format!("{}_y", b.label()), apply(&b.frames, |p| p.y)),
            ]
        })
        .collect();

    let mut signals: Vec<(&str, &[f64])> = vec![("t", t.as_slice())];
    signals.extend(columns.iter().map(|(name, v)| (name.as_str(), v.as_slice())));

    write_csv(writer, &signals)
}

pub fn export_scene<W: Write>(scene: &Scene, writer: W) -> Result<(), csv::Error> {
    match scene {
        Scene::Single(track) => export_orbit_track(track, writer),
        Scene::System(track) => export_system_track(track, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{OrbitShape, PositionFormula};

    #[test]
    fn csv_columns() {
        let mut buf = Vec::new();
        let a = [1.0, 2.0];
        let b = [0.5, 0.25, 9.0];
        write_csv(&mut buf, &[("a", &a[..]), ("b", &b[..])]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "a,b\n1.000000,0.500000\n2.000000,0.250000\n");
    }

    #[test]
    fn orbit_table() {
        let shape = OrbitShape::new(4.0, 0.0).unwrap();
        let track = OrbitTrack::sample(shape, PositionFormula::Parametric, 4, 10).unwrap();
        let mut buf = Vec::new();
        export_orbit_track(&track, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "t,mean_anomaly,x,y,r");
        assert_eq!(lines[1], "0.000000,0.000000,4.000000,0.000000,4.000000");
        assert!(lines[3].starts_with("4.000000,3.141593,-4.000000,"));
    }

    #[test]
    fn system_table() {
        let track = SystemTrack::solar_system(300, 10).unwrap();
        let mut buf = Vec::new();
        export_scene(&Scene::System(track), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let mut lines = s.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("t,Mercury_x,Mercury_y,Venus_x"));
        assert!(header.ends_with("Neptune_x,Neptune_y"));
        assert_eq!(lines.count(), 300);
    }
}
