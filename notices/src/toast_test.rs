use std::sync::{Arc, Mutex};

use super::*;

// =============================================================
// Ttl
// =============================================================

#[test]
fn default_ttl_is_five_seconds() {
    assert_eq!(Ttl::Default.delay(), Some(Duration::from_millis(5000)));
    assert_eq!(ToastSpec::success("Saved").ttl, Ttl::Default);
}

#[test]
fn zero_millis_means_persistent() {
    assert_eq!(Ttl::from_millis(0), Ttl::Persistent);
    assert_eq!(Ttl::from_millis(0).delay(), None);
    assert_eq!(Ttl::After(Duration::ZERO).delay(), None);
}

#[test]
fn explicit_millis_become_delay() {
    assert_eq!(Ttl::from_millis(100).delay(), Some(Duration::from_millis(100)));
}

// =============================================================
// ToastQueue
// =============================================================

#[test]
fn each_add_grows_queue_by_one() {
    let mut queue = ToastQueue::new();
    let titles = ["Saved", "Deleted", "Failed", "Heads up"];
    for (i, title) in titles.iter().enumerate() {
        queue.add(ToastSpec::info(*title));
        assert_eq!(queue.len(), i + 1);
    }
}

#[test]
fn ids_are_unique_and_preserve_insertion_order() {
    let mut queue = ToastQueue::new();
    let a = queue.add(ToastSpec::success("a")).id;
    let b = queue.add(ToastSpec::error("b")).id;
    let c = queue.add(ToastSpec::warning("c")).id;
    assert_ne!(a, b);
    assert_ne!(b, c);

    let order: Vec<_> = queue.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn each_toast_is_independently_removable() {
    let mut queue = ToastQueue::new();
    let a = queue.add(ToastSpec::success("a")).id;
    let b = queue.add(ToastSpec::success("b")).id;
    let c = queue.add(ToastSpec::success("c")).id;

    assert!(queue.remove(b));
    assert!(queue.contains(a));
    assert!(!queue.contains(b));
    assert!(queue.contains(c));
    assert_eq!(queue.len(), 2);
}

#[test]
fn removing_unknown_id_is_noop() {
    let mut queue = ToastQueue::new();
    queue.add(ToastSpec::info("kept"));
    assert!(!queue.remove(ToastId(999)));
    assert_eq!(queue.len(), 1);
}

#[test]
fn removing_twice_is_noop() {
    let mut queue = ToastQueue::new();
    let id = queue.add(ToastSpec::error("Failed")).id;
    assert!(queue.remove(id));
    assert!(!queue.remove(id));
    assert!(queue.is_empty());
}

#[test]
fn add_reports_expiry_for_scheduling() {
    let mut queue = ToastQueue::new();
    let default = queue.add(ToastSpec::success("Done"));
    let sticky = queue.add(ToastSpec::error("Failed").persistent());
    let short = queue.add(ToastSpec::info("Quick").with_ttl(Ttl::from_millis(100)));

    assert_eq!(default.expires_in, Some(DEFAULT_TTL));
    assert_eq!(sticky.expires_in, None);
    assert_eq!(short.expires_in, Some(Duration::from_millis(100)));
}

#[test]
fn toast_keeps_payload() {
    let mut queue = ToastQueue::new();
    let id = queue.add(ToastSpec::error("Failed").with_message("Network unreachable")).id;
    let toast = queue.get(id).expect("toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Failed");
    assert_eq!(toast.message.as_deref(), Some("Network unreachable"));
}

#[test]
fn ids_are_not_reused_after_clear() {
    let mut queue = ToastQueue::new();
    let first = queue.add(ToastSpec::info("one")).id;
    queue.clear();
    let second = queue.add(ToastSpec::info("two")).id;
    assert_ne!(first, second);
}

#[test]
fn kind_names_are_lowercase() {
    assert_eq!(ToastKind::Success.as_str(), "success");
    assert_eq!(ToastKind::Error.as_str(), "error");
    assert_eq!(ToastKind::Warning.as_str(), "warning");
    assert_eq!(ToastKind::Info.as_str(), "info");
}

// =============================================================
// expire_after
// =============================================================

fn shared_queue() -> Arc<Mutex<ToastQueue>> {
    Arc::new(Mutex::new(ToastQueue::new()))
}

fn spawn_expiry(queue: &Arc<Mutex<ToastQueue>>, scheduled: Scheduled) -> tokio::task::JoinHandle<()> {
    let queue = queue.clone();
    tokio::spawn(expire_after(scheduled, tokio::time::sleep, move |id| {
        queue.lock().unwrap().remove(id);
    }))
}

#[tokio::test(start_paused = true)]
async fn short_ttl_toast_is_gone_after_its_duration() {
    let queue = shared_queue();
    let scheduled = queue.lock().unwrap().add(ToastSpec::success("Done").with_ttl(Ttl::from_millis(100)));
    let _task = spawn_expiry(&queue, scheduled);

    tokio::time::sleep(Duration::from_millis(99)).await;
    assert!(queue.lock().unwrap().contains(scheduled.id));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!queue.lock().unwrap().contains(scheduled.id));
}

#[tokio::test(start_paused = true)]
async fn default_ttl_toast_expires_after_five_seconds() {
    let queue = shared_queue();
    let scheduled = queue.lock().unwrap().add(ToastSpec::info("Heads up"));
    let _task = spawn_expiry(&queue, scheduled);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert_eq!(queue.lock().unwrap().len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(queue.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_removal_makes_late_timer_inert() {
    let queue = shared_queue();
    let failed = queue.lock().unwrap().add(ToastSpec::error("Failed"));
    let _task = spawn_expiry(&queue, failed);

    assert!(queue.lock().unwrap().remove(failed.id));
    assert!(!queue.lock().unwrap().contains(failed.id));

    let later = queue.lock().unwrap().add(ToastSpec::info("Later").persistent());
    tokio::time::sleep(Duration::from_millis(5001)).await;

    let queue = queue.lock().unwrap();
    assert_eq!(queue.len(), 1);
    assert!(queue.contains(later.id));
}

#[tokio::test(start_paused = true)]
async fn persistent_toast_never_expires() {
    let queue = shared_queue();
    let scheduled = queue.lock().unwrap().add(ToastSpec::warning("Stays").with_ttl(Ttl::from_millis(0)));
    let task = spawn_expiry(&queue, scheduled);
    task.await.expect("expiry task");

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert!(queue.lock().unwrap().contains(scheduled.id));

    assert!(queue.lock().unwrap().remove(scheduled.id));
    assert!(queue.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn timers_are_independent() {
    let queue = shared_queue();
    let fast = queue.lock().unwrap().add(ToastSpec::info("fast").with_ttl(Ttl::from_millis(50)));
    let slow = queue.lock().unwrap().add(ToastSpec::info("slow").with_ttl(Ttl::from_millis(500)));
    let _a = spawn_expiry(&queue, fast);
    let _b = spawn_expiry(&queue, slow);

    tokio::time::sleep(Duration::from_millis(100)).await;
    {
        let queue = queue.lock().unwrap();
        assert!(!queue.contains(fast.id));
        assert!(queue.contains(slow.id));
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(queue.lock().unwrap().is_empty());
}
