use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use observable_form::prelude::*;

fn email_field() -> Field<String> {
    Field::new(String::new(), [Validator::required(), Validator::email()]).unwrap()
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    (count, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Field notifications
// ============================================================================

#[test]
fn test_field_notifies_every_write() {
    let field = email_field();
    let (count, bump) = counter();
    field.subscribe(move |_| bump());

    field.set("test".to_string());
    field.set("test".to_string());
    field.set("test@gmail.com".to_string());

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_listener_sees_post_validation_state() {
    let field = email_field();
    let observed = Arc::new(Mutex::new(Vec::new()));

    let reader = field.clone();
    let sink = Arc::clone(&observed);
    field.subscribe(move |event| {
        assert_eq!(event.is_valid, reader.is_valid());
        sink.lock().unwrap().push((reader.value(), event.is_valid));
    });

    field.set("test".to_string());
    field.set("test@gmail.com".to_string());

    let observed = observed.lock().unwrap();
    assert_eq!(
        *observed,
        [
            ("test".to_string(), false),
            ("test@gmail.com".to_string(), true),
        ]
    );
}

#[test]
fn test_errors_changed_flag() {
    let field = email_field();
    let flags = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&flags);
    field.subscribe(move |event| sink.lock().unwrap().push(event.errors_changed));

    field.set("test".to_string());
    field.set("other".to_string());
    field.set("a@b.co".to_string());

    assert_eq!(*flags.lock().unwrap(), [true, false, true]);
}

#[test]
fn test_notify_on_change_policy() {
    let field = Field::builder(String::new())
        .validator(Validator::required())
        .notify(NotifyPolicy::OnChange)
        .build();
    let (count, bump) = counter();
    field.subscribe(move |_| bump());

    field.set("a".to_string());
    field.set("b".to_string());
    field.set(String::new());

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_listeners_run_in_subscription_order() {
    let field = email_field();
    let order = Arc::new(Mutex::new(Vec::new()));
    for i in 0..3 {
        let sink = Arc::clone(&order);
        field.subscribe(move |_| sink.lock().unwrap().push(i));
    }

    field.set("x".to_string());
    assert_eq!(*order.lock().unwrap(), [0, 1, 2]);
}

#[test]
fn test_unsubscribe() {
    let field = email_field();
    let (count, bump) = counter();
    let id = field.subscribe(move |_| bump());

    field.set("a".to_string());
    assert!(field.unsubscribe(id));
    assert!(!field.unsubscribe(id));
    field.set("b".to_string());

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(field.subscriber_count(), 0);
}

#[test]
fn test_listener_may_write_field() {
    let field = Field::unvalidated(String::new());
    let writer = field.clone();
    field.subscribe(move |_| {
        if writer.value() == "lower" {
            writer.set("LOWER".to_string());
        }
    });

    field.set("lower".to_string());
    assert_eq!(field.value(), "LOWER");
}

// ============================================================================
// Form notifications
// ============================================================================

#[test]
fn test_form_reemits_member_changes() {
    let name = Field::new(String::new(), [Validator::required()]).unwrap();
    let email = email_field();
    let form = Form::builder()
        .field("name", &name)
        .field("email", &email)
        .build()
        .unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    form.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    name.set("Ada".to_string());
    email.set("ada@example.com".to_string());

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].member, "name");
    assert_eq!(events[0].field, name.id());
    assert!(!events[0].is_valid);
    assert_eq!(events[1].member, "email");
    assert!(events[1].is_valid);
}

#[test]
fn test_form_listener_sees_current_validity() {
    let email = email_field();
    let form = Form::builder().field("email", &email).build().unwrap();

    let reader = form.clone();
    let checked = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&checked);
    form.subscribe(move |event| {
        assert_eq!(event.is_valid, reader.is_valid());
        handle.fetch_add(1, Ordering::SeqCst);
    });

    email.set("test".to_string());
    email.set("test@gmail.com".to_string());
    assert_eq!(checked.load(Ordering::SeqCst), 2);
}

#[test]
fn test_form_on_change_policy() {
    let email = email_field();
    let form = Form::builder()
        .field("email", &email)
        .notify(NotifyPolicy::OnChange)
        .build()
        .unwrap();
    let (count, bump) = counter();
    form.subscribe(move |_| bump());

    email.set("test".to_string());
    email.set("test@gmail.com".to_string());
    email.set("a@b.co".to_string());

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_form_subscribes_to_members() {
    let email = email_field();
    let form = Form::builder().field("email", &email).build().unwrap();
    assert_eq!(email.subscriber_count(), 1);

    let other_handle = form.clone();
    drop(form);
    assert_eq!(email.subscriber_count(), 1);

    drop(other_handle);
    assert_eq!(email.subscriber_count(), 0);
}

#[test]
fn test_form_unsubscribe() {
    let email = email_field();
    let form = Form::builder().field("email", &email).build().unwrap();
    let (count, bump) = counter();
    let id = form.subscribe(move |_| bump());

    assert!(form.unsubscribe(id));
    email.set("x".to_string());

    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(form.subscriber_count(), 0);
}
