use glam::Vec2;

/// Index of the point nearest to `pointer`, if strictly closer than
/// `max_distance`. The first of several equally near points wins.
pub fn find_nearest<I>(points: I, pointer: Vec2, max_distance: f32) -> Option<usize>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut best = None::<(usize, f32)>;
    for (i, p) in points.into_iter().enumerate() {
        let d = p.distance(pointer);
        if !d.is_finite() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.filter(|&(_, d)| d < max_distance).map(|(i, _)| i)
}
