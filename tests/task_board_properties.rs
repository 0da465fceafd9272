use proptest::prelude::*;
use std::collections::HashSet;
use tasktracker::{Draft, DraftUpdate, Status, TaskBoard, TaskId};

#[derive(Debug, Clone)]
enum Op {
    Create { title: String, assignee: String },
    Delete(u64),
    SetStatus(u64, Status),
}

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pending),
        Just(Status::InProgress),
        Just(Status::Completed),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z ]{0,8}", "[a-z]{0,4}")
            .prop_map(|(title, assignee)| Op::Create { title, assignee }),
        (0u64..30).prop_map(Op::Delete),
        (0u64..30, status()).prop_map(|(id, s)| Op::SetStatus(id, s)),
    ]
}

proptest! {
    #[test]
    fn summary_always_matches_collection(ops in prop::collection::vec(op(), 0..60)) {
        let mut board = TaskBoard::with_sample_tasks().unwrap();
        let mut seen: HashSet<TaskId> = board.list_tasks().iter().map(|t| t.id).collect();

        for op in ops {
            match op {
                Op::Create { title, assignee } => {
                    let valid = !title.is_empty() && !assignee.is_empty();
                    let before = board.list_tasks().len();
                    board.update_draft(DraftUpdate::Title(title));
                    board.update_draft(DraftUpdate::Assignee(assignee));
                    let draft = board.draft().clone();

                    match board.create_task() {
                        Ok(task) => {
                            prop_assert!(valid);
                            prop_assert!(seen.insert(task.id), "id {} reused", task.id);
                            prop_assert_eq!(board.list_tasks().len(), before + 1);
                            prop_assert_eq!(board.list_tasks().last(), Some(&task));
                            prop_assert_eq!(board.draft(), &Draft::default());
                        }
                        Err(_) => {
                            prop_assert!(!valid);
                            prop_assert_eq!(board.list_tasks().len(), before);
                            prop_assert_eq!(board.draft(), &draft);
                        }
                    }
                }
                Op::Delete(id) => {
                    board.delete_task(TaskId(id));
                    prop_assert!(board.task(TaskId(id)).is_none());
                }
                Op::SetStatus(id, s) => {
                    let before = board.task(TaskId(id)).cloned();
                    board.update_status(TaskId(id), s);
                    if let Some(before) = before {
                        let after = board.task(TaskId(id)).unwrap();
                        prop_assert_eq!(after.status, s);
                        prop_assert_eq!(&after.title, &before.title);
                        prop_assert_eq!(&after.assignee, &before.assignee);
                        prop_assert_eq!(&after.description, &before.description);
                        prop_assert_eq!(after.due_date, before.due_date);
                    }
                }
            }

            prop_assert_eq!(board.summary().total(), board.list_tasks().len());
        }
    }

    #[test]
    fn deletion_preserves_survivor_order(victims in prop::collection::vec(1u64..=10, 0..10)) {
        let mut board = TaskBoard::with_sample_tasks().unwrap();
        for id in &victims {
            board.delete_task(TaskId(*id));
        }
        let ids: Vec<u64> = board.list_tasks().iter().map(|t| t.id.0).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }
}
