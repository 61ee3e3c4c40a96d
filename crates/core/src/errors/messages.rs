//! Localized (Vietnamese) messages keyed by service and HTTP status

use portalkit_domain::constants::UNKNOWN_ERROR_MESSAGE;
use portalkit_domain::Service;

/// Service-specific message, if the service defines one for `status`.
pub const fn service_message(service: Service, status: u16) -> Option<&'static str> {
    let message = match (service, status) {
        (Service::Account, 400) => "Thông tin tài khoản không hợp lệ",
        (Service::Account, 401) => "Đăng nhập thất bại",
        (Service::Account, 403) => "Không có quyền truy cập tài khoản",
        (Service::Account, 404) => "Tài khoản không tồn tại",
        (Service::Account, 409) => "Tài khoản đã tồn tại",
        (Service::Account, 422) => "Dữ liệu tài khoản không hợp lệ",

        (Service::Payment, 400) => "Thông tin thanh toán không hợp lệ",
        (Service::Payment, 401) => "Không có quyền thực hiện thanh toán",
        (Service::Payment, 403) => "Thanh toán bị từ chối",
        (Service::Payment, 404) => "Phương thức thanh toán không tồn tại",
        (Service::Payment, 409) => "Giao dịch đã tồn tại",
        (Service::Payment, 422) => "Dữ liệu thanh toán không hợp lệ",

        (Service::Notification, 400) => "Thông tin thông báo không hợp lệ",
        (Service::Notification, 401) => "Không có quyền gửi thông báo",
        (Service::Notification, 403) => "Gửi thông báo bị từ chối",
        (Service::Notification, 404) => "Thông báo không tồn tại",
        (Service::Notification, 409) => "Thông báo đã tồn tại",
        (Service::Notification, 422) => "Dữ liệu thông báo không hợp lệ",

        (Service::User, 400) => "Thông tin người dùng không hợp lệ",
        (Service::User, 401) => "Không có quyền truy cập thông tin người dùng",
        (Service::User, 403) => "Truy cập thông tin người dùng bị từ chối",
        (Service::User, 404) => "Người dùng không tồn tại",
        (Service::User, 409) => "Thông tin người dùng đã tồn tại",
        (Service::User, 422) => "Dữ liệu người dùng không hợp lệ",

        _ => return None,
    };
    Some(message)
}

/// Fallback message shared by every service.
pub const fn default_message(status: u16) -> Option<&'static str> {
    let message = match status {
        400 => "Yêu cầu không hợp lệ",
        401 => "Không có quyền truy cập",
        403 => "Bị cấm truy cập",
        404 => "Không tìm thấy tài nguyên",
        409 => "Xung đột dữ liệu",
        422 => "Dữ liệu không hợp lệ",
        429 => "Quá nhiều yêu cầu",
        500 => "Lỗi máy chủ",
        502 => "Lỗi gateway",
        503 => "Dịch vụ không khả dụng",
        504 => "Hết thời gian chờ gateway",
        _ => return None,
    };
    Some(message)
}

/// Service table, then the default table, then the unknown-error string.
pub fn status_message(service: Service, status: u16) -> &'static str {
    service_message(service, status)
        .or_else(|| default_message(status))
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
}
