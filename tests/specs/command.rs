//! Command mapping and sub-command execution inside command bodies.

use crate::prelude::{arg_log, forbidden, recording};
use brix_core::{listener, Brix};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[test]
fn mapped_command_receives_emitted_arguments() {
    let brix = Brix::new();
    let log = arg_log();

    let command = recording(&log);
    brix.command.map("test", command.clone());
    brix.event
        .emit("test", &[json!({"prop1": "1", "prop2": 2}), json!(1), json!("arg")])
        .unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![vec![json!({"prop1": "1", "prop2": 2}), json!(1), json!("arg")]]
    );

    brix.command.unmap("test", &command);
}

#[test]
fn unmapped_command_is_not_invoked() {
    let brix = Brix::new();

    let command = forbidden("executing unmapped command");
    brix.command.map("test", command.clone());
    brix.command.unmap("test", &command);

    brix.event.emit("test", &[]).unwrap();
}

#[test]
fn command_runs_a_sub_command() {
    let brix = Brix::new();
    let ran = Arc::new(Mutex::new(false));

    let body = {
        let commands = brix.command.clone();
        let ran = Arc::clone(&ran);
        listener(move |_| {
            let ran = Arc::clone(&ran);
            commands.execute(move || *ran.lock().unwrap() = true);
            Ok(())
        })
    };
    brix.command.map("test", body);

    brix.event.emit("test", &[]).unwrap();
    assert!(*ran.lock().unwrap());
}

#[test]
fn command_runs_a_sub_command_with_payload() {
    let brix = Brix::new();
    let the_obj = json!({"prop1": "1", "prop2": 2});
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));

    let body = {
        let commands = brix.command.clone();
        let seen = Arc::clone(&seen);
        listener(move |args| {
            let seen = Arc::clone(&seen);
            commands
                .payload(args[0].clone())
                .execute(move |p| *seen.lock().unwrap() = Some(p.clone()));
            Ok(())
        })
    };
    brix.command.map("test", body);

    brix.event
        .emit("test", &[the_obj.clone(), json!(1), json!("arg")])
        .unwrap();
    assert_eq!(*seen.lock().unwrap(), Some(the_obj));
}

#[test]
fn guarded_sub_commands_inside_a_command() {
    let brix = Brix::new();
    let the_obj = json!({"prop1": "1", "prop2": 2});
    let log = arg_log();

    let body = {
        let commands = brix.command.clone();
        let log = Arc::clone(&log);
        listener(move |args| {
            let payload = args[0].clone();

            let log = Arc::clone(&log);
            commands
                .guard(|| true)
                .payload(payload.clone())
                .execute(move |p| log.lock().unwrap().push(vec![p.clone()]));

            commands
                .guard(|| true)
                .guard(|| false)
                .payload(payload)
                .execute(|_| panic!("guards passed"));

            Ok(())
        })
    };
    brix.command.map("test", body);

    brix.event
        .emit("test", &[the_obj.clone(), json!(1), json!("arg")])
        .unwrap();
    assert_eq!(*log.lock().unwrap(), vec![vec![the_obj]]);
}

#[test]
fn multiple_payloads_reuse_the_guard_list() {
    let brix = Brix::new();
    let the_obj = json!({"prop1": "1", "prop2": 2});
    let log = arg_log();

    let body = {
        let commands = brix.command.clone();
        let log = Arc::clone(&log);
        listener(move |args| {
            let first = Arc::clone(&log);
            let second = Arc::clone(&log);
            commands
                .guard(|| true)
                .payload(args[0].clone())
                .execute(move |p| first.lock().unwrap().push(vec![p.clone()]))
                .payload(json!(0))
                .execute(move |p| second.lock().unwrap().push(vec![p.clone()]));
            Ok(())
        })
    };
    brix.command.map("test", body);

    brix.event
        .emit("test", &[the_obj.clone(), json!(1), json!("arg")])
        .unwrap();
    assert_eq!(*log.lock().unwrap(), vec![vec![the_obj], vec![json!(0)]]);
}
