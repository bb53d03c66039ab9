mod tests {
    use knob_light::math8::{map_range, scale_ratio, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale_ratio() {
        assert_eq!(scale_ratio(200, 0, 100), 0);
        assert_eq!(scale_ratio(200, 100, 100), 200);
        assert_eq!(scale_ratio(200, 150, 100), 200);
        assert_eq!(scale_ratio(200, 50, 0), 0);
        assert_eq!(scale_ratio(255, 5, 100), 12);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0, 0, 1023, 0, 255), 0);
        assert_eq!(map_range(1023, 0, 1023, 0, 255), 255);
        assert_eq!(map_range(15, 15, 1000, 1000, 10), 1000);
        assert_eq!(map_range(1000, 15, 1000, 1000, 10), 10);
        assert_eq!(map_range(42, 7, 7, 3, 9), 3);
    }
}
