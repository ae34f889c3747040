// ==========================================
// 工单生命周期引擎测试
// ==========================================
// 测试范围:
// 1. 合法性表对全部 (操作, 状态) 组合的判定
// 2. 转换表逐条验证与副作用
// 3. 不合法转换的拒绝
// ==========================================


use chrono::Utc;
use field_service_console::domain::order::{CompletionForm, DEFAULT_AFTER_SALES_STATUS};
use field_service_console::domain::types::{OrderAction, OrderStatus};
use field_service_console::engine::lifecycle::{LifecycleEngine, LifecycleError, TransitionContext};
use test_helpers::create_test_order;

// ==========================================
// 合法性表
// ==========================================

/// 合法组合清单(逐条写死,与实现相互印证)
fn expected_valid_pairs() -> Vec<(OrderAction, Vec<OrderStatus>)> {
    use OrderAction::*;
    use OrderStatus::*;

    vec![
        (Accept, vec![Pending]),
        (ConfirmArrival, vec![ToVisit]),
        (Pause, vec![InProgress]),
        (Resume, vec![OnHold]),
        (Complete, vec![InProgress]),
        (Parts, vec![ToVisit, InProgress]),
        (Guide, vec![InProgress]),
        (
            Support,
            vec![Pending, ToVisit, InProgress, OnHold, AfterSales, Completed],
        ),
        (
            Navigate,
            vec![Pending, ToVisit, InProgress, OnHold, AfterSales],
        ),
        (Reassign, vec![InProgress]),
    ]
}

/// 测试: 合法性判定对 10x6 全组合与清单一致
#[test]
fn test_action_validity_table_is_exhaustive() {
    let engine = LifecycleEngine::new();
    let expected = expected_valid_pairs();

    for action in OrderAction::ALL {
        let valid_statuses = &expected
            .iter()
            .find(|(a, _)| *a == action)
            .expect("action missing from expectation table")
            .1;

        for status in OrderStatus::ALL {
            assert_eq!(
                engine.is_action_valid(action, status),
                valid_statuses.contains(&status),
                "mismatch for action={} status={}",
                action,
                status
            );
        }
    }
}

/// 测试: valid_actions 派生列表与合法性判定一致
#[test]
fn test_valid_actions_matches_validity() {
    let engine = LifecycleEngine::new();
    for status in OrderStatus::ALL {
        let actions = engine.valid_actions(status);
        for action in OrderAction::ALL {
            assert_eq!(
                actions.contains(&action),
                engine.is_action_valid(action, status)
            );
        }
    }
}

/// 测试: 各状态的主操作按钮
#[test]
fn test_primary_action_per_status() {
    let engine = LifecycleEngine::new();
    assert_eq!(engine.primary_action(OrderStatus::Pending), OrderAction::Accept);
    assert_eq!(engine.primary_action(OrderStatus::ToVisit), OrderAction::ConfirmArrival);
    assert_eq!(engine.primary_action(OrderStatus::InProgress), OrderAction::Complete);
    assert_eq!(engine.primary_action(OrderStatus::OnHold), OrderAction::Resume);
    assert_eq!(engine.primary_action(OrderStatus::AfterSales), OrderAction::Support);
    assert_eq!(engine.primary_action(OrderStatus::Completed), OrderAction::Support);
}

// ==========================================
// 转换表
// ==========================================

/// 测试: accept 后再次 accept 被拒绝
#[test]
fn test_accept_then_accept_again_rejected() {
    let engine = LifecycleEngine::new();
    let ctx = TransitionContext::at(Utc::now());

    let pending = create_test_order("WO-1", OrderStatus::Pending);
    let accepted = engine.transition(&pending, OrderAction::Accept, &ctx).unwrap();
    assert_eq!(accepted.status, OrderStatus::ToVisit);

    let err = engine
        .transition(&accepted, OrderAction::Accept, &ctx)
        .unwrap_err();
    assert_eq!(
        err,
        LifecycleError::InvalidTransition {
            action: OrderAction::Accept,
            status: OrderStatus::ToVisit,
        }
    );
}

/// 测试: pause/resume 往返
#[test]
fn test_pause_resume_roundtrip() {
    let engine = LifecycleEngine::new();
    let ctx = TransitionContext::at(Utc::now());

    let in_progress = create_test_order("WO-1", OrderStatus::InProgress);
    let on_hold = engine.transition(&in_progress, OrderAction::Pause, &ctx).unwrap();
    assert_eq!(on_hold.status, OrderStatus::OnHold);

    let resumed = engine.transition(&on_hold, OrderAction::Resume, &ctx).unwrap();
    assert_eq!(resumed.status, OrderStatus::InProgress);
}

/// 测试: 完工提交按售后标记分流,售后状态初始化非空
#[test]
fn test_complete_after_sales_routing() {
    let engine = LifecycleEngine::new();
    let now = Utc::now();
    let in_progress = create_test_order("WO-1", OrderStatus::InProgress);

    // 不转售后 -> COMPLETED
    let form = CompletionForm::resolved("Firmware Update");
    let done = engine
        .transition(
            &in_progress,
            OrderAction::Complete,
            &TransitionContext::with_completion(now, &form),
        )
        .unwrap();
    assert_eq!(done.status, OrderStatus::Completed);
    assert!(done.after_sales_status.is_none());

    // 转售后 -> AFTER_SALES,跟进状态非空
    let flagged = CompletionForm::with_after_sales("Part Replaced", Some("Parts Ordered"));
    let after_sales = engine
        .transition(
            &in_progress,
            OrderAction::Complete,
            &TransitionContext::with_completion(now, &flagged),
        )
        .unwrap();
    assert_eq!(after_sales.status, OrderStatus::AfterSales);
    assert_eq!(after_sales.after_sales_status.as_deref(), Some("Parts Ordered"));

    // 未填写说明时使用默认初始状态
    let blank = CompletionForm::with_after_sales("Part Replaced", None);
    let defaulted = engine
        .transition(
            &in_progress,
            OrderAction::Complete,
            &TransitionContext::with_completion(now, &blank),
        )
        .unwrap();
    assert_eq!(
        defaulted.after_sales_status.as_deref(),
        Some(DEFAULT_AFTER_SALES_STATUS)
    );
}

/// 测试: 终态 COMPLETED 上没有任何转换类合法操作
#[test]
fn test_completed_is_terminal() {
    let engine = LifecycleEngine::new();
    let ctx = TransitionContext::at(Utc::now());
    let completed = create_test_order("WO-1", OrderStatus::Completed);

    for action in OrderAction::ALL {
        if action.is_transition() {
            assert!(engine.transition(&completed, action, &ctx).is_err());
        }
    }
}

/// 测试: 转换保持 id 与无关字段不变
#[test]
fn test_transition_preserves_identity_fields() {
    let engine = LifecycleEngine::new();
    let ctx = TransitionContext::at(Utc::now());
    let pending = create_test_order("WO-1", OrderStatus::Pending);

    let next = engine.transition(&pending, OrderAction::Accept, &ctx).unwrap();
    assert_eq!(next.id, pending.id);
    assert_eq!(next.store_name, pending.store_name);
    assert_eq!(next.equipment_type, pending.equipment_type);
    assert_eq!(next.priority, pending.priority);
}
