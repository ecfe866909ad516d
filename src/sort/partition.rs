//! 三路划分 (Dutch National Flag)

/// 以 `pivot` 位置的元素为枢轴对窗口做三路划分
///
/// 划分后 `[0, lt)` 小于枢轴，`[lt, gt]` 等于枢轴，`(gt, len)` 大于枢轴。
/// 返回等值区间的闭区间边界 `(lt, gt)`，该区间至少包含枢轴本身。
///
/// # Panics
///
/// 窗口为空或 `pivot` 越界时 panic。
pub fn partition_3way<T: Ord>(window: &mut [T], pivot: usize) -> (usize, usize) {
    assert!(pivot < window.len(), "pivot {} out of window of length {}", pivot, window.len());

    // 枢轴暂存在窗口首位，小于它的元素依次放到 1..=lt
    window.swap(0, pivot);
    let mut lt = 0;
    let mut i = 1;
    let mut gt = window.len() - 1;

    while i <= gt {
        match window[i].cmp(&window[0]) {
            std::cmp::Ordering::Less => {
                lt += 1;
                window.swap(lt, i);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                window.swap(i, gt);
                gt -= 1;
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }

    window.swap(0, lt);
    (lt, gt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_partition(window: &[i32], lt: usize, gt: usize, pivot_value: i32) {
        assert!(window[..lt].iter().all(|&x| x < pivot_value));
        assert!(window[lt..=gt].iter().all(|&x| x == pivot_value));
        assert!(window[gt + 1..].iter().all(|&x| x > pivot_value));
    }

    #[test]
    fn test_all_equal_single_run() {
        let mut window = [3, 3, 3, 3, 3];
        assert_eq!(partition_3way(&mut window, 2), (0, 4));
        assert_eq!(window, [3; 5]);
    }

    #[test]
    fn test_single_element() {
        let mut window = [7];
        assert_eq!(partition_3way(&mut window, 0), (0, 0));
    }

    #[test]
    fn test_mixed_values() {
        let mut window = [5, 1, 9, 5, 2, 8, 5, 0];
        let (lt, gt) = partition_3way(&mut window, 3);
        assert_eq!((lt, gt), (3, 5));
        check_partition(&window, lt, gt, 5);
    }

    #[test]
    fn test_pivot_is_minimum_and_maximum() {
        let mut window = [4, 2, 6, 1];
        let (lt, gt) = partition_3way(&mut window, 3);
        assert_eq!((lt, gt), (0, 0));
        check_partition(&window, lt, gt, 1);

        let mut window = [4, 2, 6, 1];
        let (lt, gt) = partition_3way(&mut window, 2);
        assert_eq!((lt, gt), (3, 3));
        check_partition(&window, lt, gt, 6);
    }

    #[test]
    #[should_panic]
    fn test_empty_window_panics() {
        let mut window: [i32; 0] = [];
        partition_3way(&mut window, 0);
    }
}
