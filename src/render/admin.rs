//! Admin pages: password login and the complaint review dashboard.
//!
//! The dashboard is re-rendered server-side on every load; row actions call
//! the JSON API and reload the page rather than patching the table in place.

use crate::entities::{ComplaintModel, ComplaintStatus};
use crate::render::html::{
    dashboard_stats, escape_html, format_timestamp, page_shell, status_css_class, status_label,
};
use std::fmt::Write;

const ADMIN_STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }
body { background-color: #f5f5f5; color: #333; line-height: 1.6; }
.container { max-width: 1200px; margin: 0 auto; padding: 20px; }
header { background-color: #fff; box-shadow: 0 2px 10px rgba(0,0,0,0.1); padding: 20px; border-radius: 8px; margin-bottom: 20px; position: relative; }
h1 { color: #2c3e50; margin-bottom: 10px; }
.logout-btn { position: absolute; right: 20px; top: 20px; background: #f0f0f0; border: none; border-radius: 6px; padding: 8px 16px; cursor: pointer; color: #333; }
.logout-btn:hover { background: #e0e0e0; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; margin-bottom: 20px; }
.stat-card { background-color: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); text-align: center; }
.stat-number { font-size: 24px; font-weight: bold; color: #3498db; }
.complaints-table { background-color: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #eee; }
th { background-color: #f8f9fa; font-weight: 600; }
tr:hover { background-color: #f9f9f9; }
.status-badge { display: inline-block; padding: 4px 10px; border-radius: 12px; font-size: 13px; white-space: nowrap; }
.status-pending { background: #fff3e0; color: #e65100; }
.status-processing { background: #e3f2fd; color: #1565c0; }
.status-resolved { background: #e8f5e9; color: #2e7d32; }
.action-btn { border: none; border-radius: 6px; padding: 6px 12px; margin-right: 6px; cursor: pointer; font-size: 13px; background: #e3f2fd; color: #1565c0; white-space: nowrap; }
.action-btn:hover { background: #bbdefb; }
.action-btn.danger { background: #ffebee; color: #c62828; }
.action-btn.danger:hover { background: #ffcdd2; }
.back-link { display: inline-block; margin-top: 20px; color: #3498db; text-decoration: none; }
.back-link:hover { text-decoration: underline; }
.empty-state { text-align: center; padding: 40px; color: #7f8c8d; }
.login-container { display: flex; justify-content: center; padding-top: 80px; }
.login-card { background: #fff; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); padding: 40px; width: 100%; max-width: 380px; text-align: center; }
.login-card p { color: #7f8c8d; margin: 10px 0 20px; }
.login-input { width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 8px; font-size: 16px; margin-bottom: 15px; }
.login-btn { width: 100%; padding: 12px; border: none; border-radius: 8px; background: #3498db; color: #fff; font-size: 16px; cursor: pointer; }
.login-btn:hover { background: #2980b9; }
.login-error { display: none; margin-top: 15px; padding: 10px; border-radius: 8px; background: #ffebee; color: #c62828; }
"#;

const LOGIN_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    var passwordInput = document.getElementById('password');
    var loginBtn = document.getElementById('loginBtn');
    var loginError = document.getElementById('loginError');

    function login() {
        fetch('/api/admin/login', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ password: passwordInput.value })
        }).then(function (response) {
            if (response.ok) {
                window.location.reload();
            } else {
                loginError.style.display = 'block';
                passwordInput.value = '';
            }
        });
    }

    loginBtn.addEventListener('click', login);
    passwordInput.addEventListener('keydown', function (event) {
        if (event.key === 'Enter') {
            login();
        }
    });
});
"#;

const DASHBOARD_SCRIPT: &str = r#"
function setStatus(id, status) {
    fetch('/api/complaints/' + id, {
        method: 'PUT',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ status: status })
    }).then(function (response) {
        if (response.ok) {
            window.location.reload();
        } else {
            alert('操作失败，请重试');
        }
    });
}

function removeComplaint(id) {
    if (!confirm('确定删除这条投诉吗？')) {
        return;
    }
    fetch('/api/complaints/' + id, { method: 'DELETE' }).then(function (response) {
        if (response.ok) {
            window.location.reload();
        } else {
            alert('操作失败，请重试');
        }
    });
}

document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('[data-action]').forEach(function (btn) {
        btn.addEventListener('click', function () {
            var id = this.getAttribute('data-id');
            var action = this.getAttribute('data-action');
            if (action === 'delete') {
                removeComplaint(id);
            } else {
                setStatus(id, action);
            }
        });
    });

    document.getElementById('logoutBtn').addEventListener('click', function () {
        document.cookie = 'admin_session=; Max-Age=0; path=/';
        window.location.reload();
    });
});
"#;

/// Renders the password prompt shown to unauthenticated visitors of `/admin`.
#[must_use]
pub fn login_page() -> String {
    let body = r#"<div class="login-container">
<div class="login-card">
<h1>管理员登录</h1>
<p>请输入管理密码以查看投诉记录</p>
<input type="password" id="password" class="login-input" placeholder="管理密码">
<button class="login-btn" id="loginBtn">登录</button>
<div class="login-error" id="loginError">密码错误，请重试</div>
</div>
</div>
"#;
    page_shell("管理员登录", ADMIN_STYLE, body, LOGIN_SCRIPT)
}

/// Renders the review dashboard over the given complaints (newest first, as
/// provided by the caller).
#[must_use]
pub fn dashboard_page(complaints: &[ComplaintModel]) -> String {
    let stats = dashboard_stats(complaints);

    let mut body = String::new();
    body.push_str("<div class=\"container\">\n<header>\n<h1>投诉管理后台</h1>\n<p>所有投诉记录</p>\n");
    body.push_str("<button class=\"logout-btn\" id=\"logoutBtn\">退出登录</button>\n</header>\n");

    body.push_str("<div class=\"stats\">\n");
    let cards = [
        (stats.total, "总投诉数"),
        (stats.pending, "待处理"),
        (stats.processing, "处理中"),
        (stats.resolved, "已解决"),
    ];
    for (number, label) in cards {
        let _ = writeln!(
            body,
            "<div class=\"stat-card\"><div class=\"stat-number\">{number}</div><div>{label}</div></div>"
        );
    }
    body.push_str("</div>\n");

    body.push_str("<div class=\"complaints-table\">\n");
    if complaints.is_empty() {
        body.push_str(
            "<div class=\"empty-state\">\n<h3>暂无投诉记录</h3>\n<p>还没有用户提交投诉</p>\n</div>\n",
        );
    } else {
        body.push_str("<table>\n<thead>\n<tr><th>主原因</th><th>子原因</th><th>联系方式</th><th>投诉内容</th><th>图片数量</th><th>状态</th><th>提交时间</th><th>操作</th></tr>\n</thead>\n<tbody>\n");
        for complaint in complaints {
            body.push_str(&dashboard_row(complaint));
        }
        body.push_str("</tbody>\n</table>\n");
    }
    body.push_str("</div>\n");

    body.push_str("<a href=\"/\" class=\"back-link\">返回投诉页面</a>\n</div>\n");
    page_shell("投诉管理后台", ADMIN_STYLE, &body, DASHBOARD_SCRIPT)
}

fn dashboard_row(complaint: &ComplaintModel) -> String {
    let sub_category = if complaint.sub_category.is_empty() {
        "无".to_string()
    } else {
        escape_html(&complaint.sub_category)
    };

    let mut row = String::new();
    let _ = write!(
        row,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        escape_html(&complaint.main_category),
        sub_category,
        escape_html(&complaint.contact),
        escape_html(&complaint.content),
        complaint.images.count(),
    );
    let _ = write!(
        row,
        "<td><span class=\"status-badge {}\">{}</span></td><td>{}</td><td>",
        status_css_class(complaint.status),
        status_label(complaint.status),
        format_timestamp(&complaint.created_at),
    );

    let id = escape_html(&complaint.id);
    if complaint.status == ComplaintStatus::Pending {
        let _ = write!(
            row,
            "<button class=\"action-btn\" data-action=\"processing\" data-id=\"{id}\">开始处理</button>"
        );
    }
    if complaint.status != ComplaintStatus::Resolved {
        let _ = write!(
            row,
            "<button class=\"action-btn\" data-action=\"resolved\" data-id=\"{id}\">标记解决</button>"
        );
    }
    let _ = write!(
        row,
        "<button class=\"action-btn danger\" data-action=\"delete\" data-id=\"{id}\">删除</button>"
    );

    row.push_str("</td></tr>\n");
    row
}
