//! Public-facing pages: category picker, submission form, success screen.
//!
//! The picker renders every category page up front and toggles them with a
//! small script; the chosen labels travel to the form via `localStorage`, and
//! the form posts JSON to `/api/complaints`. Image files are read only to
//! build previews and collect metadata, their bytes never leave the browser.

use crate::config::CategoryCatalog;
use crate::render::html::{escape_html, page_shell};
use std::fmt::Write;

const PUBLIC_STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; font-family: "PingFang SC", "Helvetica Neue", Arial, sans-serif; }
body { background-color: #f5f5f5; color: #333; line-height: 1.6; padding: 20px; }
.container { max-width: 600px; margin: 0 auto; background: white; border-radius: 12px; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.05); overflow: hidden; }
.header { padding: 20px; border-bottom: 1px solid #eee; text-align: center; font-size: 18px; font-weight: 600; color: #333; position: relative; }
.back-btn { position: absolute; left: 20px; top: 50%; transform: translateY(-50%); background: none; border: none; font-size: 16px; color: #07C160; cursor: pointer; }
.page { padding: 20px; display: none; }
.page.active { display: block; }
.reason-list { margin: 20px 0; }
.reason-item { display: flex; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0; cursor: pointer; }
.reason-item:last-child { border-bottom: none; }
.reason-radio { width: 20px; height: 20px; border-radius: 50%; border: 1px solid #ccc; margin-right: 12px; display: flex; align-items: center; justify-content: center; position: relative; }
.reason-radio.selected::after { content: ''; width: 12px; height: 12px; border-radius: 50%; background: #07C160; }
.reason-text { flex: 1; font-size: 16px; }
.notice { background-color: #f9f9f9; border-radius: 8px; padding: 15px; margin: 20px 0; font-size: 14px; color: #666; line-height: 1.5; }
.btn-group { display: flex; justify-content: space-between; margin-top: 20px; }
.btn { padding: 12px 20px; border-radius: 8px; font-size: 16px; font-weight: 600; cursor: pointer; transition: background-color 0.2s; border: none; }
.btn-primary { background: #07C160; color: white; }
.btn-primary:hover { background: #06ae56; }
.btn-primary:disabled { background: #ccc; cursor: not-allowed; }
.btn-secondary { background: #f0f0f0; color: #333; }
.btn-secondary:hover { background: #e0e0e0; }
.message { padding: 10px; border-radius: 8px; margin-top: 15px; text-align: center; display: none; }
.error { background: #ffebee; color: #c62828; border: 1px solid #ffcdd2; }
.form-group { margin-bottom: 20px; }
.form-group label { display: block; margin-bottom: 8px; font-weight: 600; }
.form-control { width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 8px; font-size: 16px; }
textarea.form-control { resize: vertical; min-height: 100px; }
.upload-area { border: 1px dashed #ddd; border-radius: 8px; padding: 20px; text-align: center; margin-bottom: 10px; cursor: pointer; }
.upload-icon { font-size: 40px; color: #ccc; margin-bottom: 10px; }
.upload-text { color: #999; }
.char-count { text-align: right; color: #999; font-size: 14px; margin-top: 5px; }
.success-page { text-align: center; padding: 40px 20px; }
.success-icon { font-size: 60px; color: #07C160; margin-bottom: 20px; }
.success-title { font-size: 20px; font-weight: 600; margin-bottom: 10px; }
.success-text { color: #666; margin-bottom: 30px; }
"#;

const INTAKE_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    var pages = document.querySelectorAll('.page');

    function showPage(pageId) {
        pages.forEach(function (page) { page.classList.remove('active'); });
        document.getElementById(pageId).classList.add('active');
    }

    function goToForm() {
        window.location.href = '/submit';
    }

    var pageMain = document.getElementById('page-main');
    var nextBtnMain = document.getElementById('nextBtnMain');
    var mainItems = pageMain.querySelectorAll('.reason-item');
    var selectedMain = null;

    mainItems.forEach(function (item) {
        item.addEventListener('click', function () {
            mainItems.forEach(function (other) {
                other.querySelector('.reason-radio').classList.remove('selected');
            });
            this.querySelector('.reason-radio').classList.add('selected');
            selectedMain = this;
            nextBtnMain.disabled = false;
        });
    });

    nextBtnMain.addEventListener('click', function () {
        if (!selectedMain) { return; }
        localStorage.setItem('complaint.mainCategory', selectedMain.getAttribute('data-label'));
        localStorage.removeItem('complaint.subCategory');
        var next = selectedMain.getAttribute('data-next');
        if (next === 'submit') {
            goToForm();
        } else {
            showPage(next);
        }
    });

    document.querySelectorAll('.page-sub').forEach(function (page) {
        var items = page.querySelectorAll('.reason-item');
        var nextBtn = page.querySelector('.next-btn');
        var selected = null;

        items.forEach(function (item) {
            item.addEventListener('click', function () {
                items.forEach(function (other) {
                    other.querySelector('.reason-radio').classList.remove('selected');
                });
                this.querySelector('.reason-radio').classList.add('selected');
                selected = this;
                nextBtn.disabled = false;
            });
        });

        nextBtn.addEventListener('click', function () {
            if (!selected) { return; }
            localStorage.setItem('complaint.subCategory', selected.getAttribute('data-value'));
            goToForm();
        });
    });

    document.querySelectorAll('[data-back]').forEach(function (btn) {
        btn.addEventListener('click', function () {
            showPage(this.getAttribute('data-back'));
        });
    });
});
"#;

const SUBMIT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    var mainCategory = localStorage.getItem('complaint.mainCategory') || '';
    var subCategory = localStorage.getItem('complaint.subCategory') || '';
    if (!mainCategory) {
        window.location.href = '/';
        return;
    }

    var contactInput = document.getElementById('contact');
    var contentInput = document.getElementById('content');
    var fileInput = document.getElementById('fileInput');
    var uploadArea = document.getElementById('uploadArea');
    var imagePreview = document.getElementById('imagePreview');
    var uploadCount = document.getElementById('uploadCount');
    var charCount = document.getElementById('charCount');
    var submitBtn = document.getElementById('submitBtn');
    var errorMessage = document.getElementById('errorMessage');

    var images = [];

    uploadArea.addEventListener('click', function () {
        fileInput.click();
    });

    fileInput.addEventListener('change', function () {
        var files = Array.prototype.slice.call(this.files);

        if (images.length + files.length > 9) {
            alert('最多只能上传9张图片');
            return;
        }

        files.forEach(function (file) {
            if (file.type.indexOf('image/') !== 0) {
                alert('请上传图片文件');
                return;
            }

            images.push({ name: file.name, size: file.size, type: file.type });

            var reader = new FileReader();
            reader.onload = function (e) {
                var img = document.createElement('img');
                img.src = e.target.result;
                img.style.width = '80px';
                img.style.height = '80px';
                img.style.objectFit = 'cover';
                img.style.borderRadius = '4px';
                imagePreview.appendChild(img);
            };
            reader.readAsDataURL(file);
        });

        uploadCount.textContent = images.length + '/9';
        this.value = '';
    });

    contentInput.addEventListener('input', function () {
        if (this.value.length > 200) {
            this.value = this.value.substring(0, 200);
        }
        charCount.textContent = this.value.length + '/200';
        checkSubmitButton();
    });

    contactInput.addEventListener('input', checkSubmitButton);

    function checkSubmitButton() {
        submitBtn.disabled = !(contactInput.value && contentInput.value);
    }

    function showError() {
        errorMessage.style.display = 'block';
        setTimeout(function () {
            errorMessage.style.display = 'none';
        }, 3000);
        submitBtn.disabled = false;
        submitBtn.textContent = '提交';
    }

    submitBtn.addEventListener('click', function () {
        submitBtn.disabled = true;
        submitBtn.textContent = '提交中...';

        fetch('/api/complaints', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({
                mainCategory: mainCategory,
                subCategory: subCategory,
                contact: contactInput.value,
                content: contentInput.value,
                images: images
            })
        })
            .then(function (response) { return response.json(); })
            .then(function (result) {
                if (result.success) {
                    window.location.href = '/success';
                } else {
                    showError();
                }
            })
            .catch(showError);
    });

    document.querySelectorAll('.back-to-picker').forEach(function (btn) {
        btn.addEventListener('click', function () {
            window.location.href = '/';
        });
    });
});
"#;

const SUCCESS_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    localStorage.removeItem('complaint.mainCategory');
    localStorage.removeItem('complaint.subCategory');

    document.getElementById('restartBtn').addEventListener('click', function () {
        window.location.href = '/';
    });
});
"#;

/// Renders the category picker, with one hidden page per category that has
/// subcategories.
#[must_use]
pub fn intake_page(catalog: &CategoryCatalog) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"container\">\n");

    // First page: main category list
    body.push_str("<div class=\"page active\" id=\"page-main\">\n");
    body.push_str("<div class=\"header\">请选择投诉该帐号的原因</div>\n");
    body.push_str("<div class=\"reason-list\">\n");
    for (index, category) in catalog.categories.iter().enumerate() {
        let label = escape_html(&category.label);
        let next = if category.has_subcategories() {
            format!("page-sub-{index}")
        } else {
            "submit".to_string()
        };
        let _ = writeln!(
            body,
            "<div class=\"reason-item\" data-label=\"{label}\" data-next=\"{next}\"><div class=\"reason-radio\"></div><div class=\"reason-text\">{label}</div></div>"
        );
    }
    body.push_str("</div>\n");
    body.push_str(
        "<div class=\"notice\">投诉须知：请确保您的投诉内容真实有效，虚假投诉可能承担相应法律责任。</div>\n",
    );
    body.push_str(
        "<div class=\"btn-group\"><button class=\"btn btn-primary\" id=\"nextBtnMain\" disabled>下一步</button></div>\n",
    );
    body.push_str("</div>\n");

    // One hidden page per category with second-level choices
    for (index, category) in catalog.categories.iter().enumerate() {
        if !category.has_subcategories() {
            continue;
        }
        let _ = writeln!(body, "<div class=\"page page-sub\" id=\"page-sub-{index}\">");
        body.push_str(
            "<div class=\"header\"><button class=\"back-btn\" data-back=\"page-main\">返回</button>请选择具体原因</div>\n",
        );
        body.push_str("<div class=\"reason-list\">\n");
        for subcategory in &category.subcategories {
            let value = escape_html(subcategory);
            let _ = writeln!(
                body,
                "<div class=\"reason-item\" data-value=\"{value}\"><div class=\"reason-radio\"></div><div class=\"reason-text\">{value}</div></div>"
            );
        }
        body.push_str("</div>\n");
        body.push_str("<div class=\"btn-group\">\n");
        body.push_str(
            "<button class=\"btn btn-secondary\" data-back=\"page-main\">上一步</button>\n",
        );
        body.push_str("<button class=\"btn btn-primary next-btn\" disabled>下一步</button>\n");
        body.push_str("</div>\n</div>\n");
    }

    body.push_str("</div>\n");
    page_shell("投诉", PUBLIC_STYLE, &body, INTAKE_SCRIPT)
}

/// Renders the submission form: contact, up to nine images, 200-char content.
#[must_use]
pub fn submit_page() -> String {
    let body = r#"<div class="container">
<div class="page active" id="page-submit">
<div class="header"><button class="back-btn back-to-picker">返回</button>提交投诉</div>
<div class="form-group">
<label for="contact">联系方式</label>
<input type="text" id="contact" class="form-control" placeholder="填写联系方式">
</div>
<div class="form-group">
<label>图片上传 <span id="uploadCount">0/9</span></label>
<div class="upload-area" id="uploadArea">
<div class="upload-icon">+</div>
<div class="upload-text">点击上传图片</div>
</div>
<input type="file" id="fileInput" multiple accept="image/*" style="display: none;">
<div id="imagePreview" style="display: flex; flex-wrap: wrap; gap: 10px; margin-top: 10px;"></div>
</div>
<div class="form-group">
<label for="content">投诉内容 <span id="charCount">0/200</span></label>
<textarea id="content" class="form-control" placeholder="投诉内容"></textarea>
</div>
<div class="btn-group">
<button class="btn btn-secondary back-to-picker">上一步</button>
<button class="btn btn-primary" id="submitBtn" disabled>提交</button>
</div>
<div class="message error" id="errorMessage">提交失败，请稍后重试</div>
</div>
</div>
"#;
    page_shell("提交投诉", PUBLIC_STYLE, body, SUBMIT_SCRIPT)
}

/// Renders the post-submission confirmation screen.
#[must_use]
pub fn success_page() -> String {
    let body = r#"<div class="container">
<div class="page active" id="page-success">
<div class="success-page">
<div class="success-icon">✓</div>
<div class="success-title">提交成功</div>
<div class="success-text">感谢您的反馈，我们会尽快处理您的投诉。</div>
<button class="btn btn-primary" id="restartBtn">返回首页</button>
</div>
</div>
</div>
"#;
    page_shell("提交成功", PUBLIC_STYLE, body, SUCCESS_SCRIPT)
}
