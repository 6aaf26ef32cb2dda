use super::types::{KumitePoint, PointTotal};

pub fn total_points(events: &[KumitePoint]) -> PointTotal {
    events.iter().map(|point| point.value()).sum()
}

/// Returns a new log with `event` appended. Recorded events are never
/// removed or reordered.
pub fn append_event(log: &[KumitePoint], event: KumitePoint) -> Vec<KumitePoint> {
    let mut next = Vec::with_capacity(log.len() + 1);
    next.extend_from_slice(log);
    next.push(event);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use KumitePoint::*;

    #[test]
    fn maps_each_technique_to_its_value() {
        assert_eq!(total_points(&[Yuko]), 1);
        assert_eq!(total_points(&[WazaAri]), 2);
        assert_eq!(total_points(&[Ippon]), 3);
        assert_eq!(total_points(&[]), 0);
    }

    #[test]
    fn total_ignores_event_order() {
        let events = [Ippon, Yuko, WazaAri, Yuko];
        let expected = total_points(&events);
        assert_eq!(expected, 7);

        let mut permuted = events.to_vec();
        permuted.reverse();
        assert_eq!(total_points(&permuted), expected);
        permuted.rotate_left(1);
        assert_eq!(total_points(&permuted), expected);
    }

    #[test]
    fn append_keeps_existing_log_untouched() {
        let log = vec![Yuko, Ippon];
        let next = append_event(&log, WazaAri);

        assert_eq!(log, vec![Yuko, Ippon]);
        assert_eq!(next, vec![Yuko, Ippon, WazaAri]);
    }
}
