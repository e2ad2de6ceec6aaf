//! Descriptions and advice for known diseases.
//!
//! Lookups never fail: a disease missing from the table gets a generic
//! description and the advice to see a doctor.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Description used for diseases without an entry.
pub const UNKNOWN_DESCRIPTION: &str = "Không có thông tin chi tiết";
/// Advice used for diseases without an entry.
pub const UNKNOWN_ADVICE: &str = "Nên đi khám bác sĩ để được tư vấn";

/// Message returned when no disease clears the confidence threshold.
pub const INSUFFICIENT_SIGNAL_MESSAGE: &str = "Không thể dự đoán bệnh với các triệu chứng này";
/// Advice returned when no disease clears the confidence threshold.
pub const INSUFFICIENT_SIGNAL_ADVICE: &str =
    "Vui lòng bổ sung thêm triệu chứng hoặc đi khám bác sĩ";

/// Human-facing facts about one disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub advice: &'static str,
}

impl DiseaseInfo {
    /// Look up `disease`, falling back to the generic entry.
    pub fn lookup(disease: &str) -> Self {
        DISEASE_TABLE
            .get(disease)
            .copied()
            .unwrap_or(Self::unknown())
    }

    /// The generic entry.
    pub const fn unknown() -> Self {
        Self {
            description: UNKNOWN_DESCRIPTION,
            advice: UNKNOWN_ADVICE,
        }
    }
}

// (disease, description, advice)
const DISEASES: &[(&str, &str, &str)] = &[
    (
        "Cảm cúm",
        "Bệnh nhiễm virus cúm, lây qua đường hô hấp",
        "Nghỉ ngơi, uống nhiều nước, đi khám nếu sốt cao kéo dài",
    ),
    (
        "Cảm lạnh",
        "Nhiễm virus đường hô hấp trên, thường tự khỏi",
        "Nghỉ ngơi, uống nước ấm, giữ ấm cơ thể",
    ),
    (
        "Viêm họng",
        "Viêm nhiễm vùng họng do vi khuẩn hoặc virus",
        "Súc miệng nước muối, uống nhiều nước, đi khám nếu không giảm",
    ),
    (
        "Viêm amidan",
        "Viêm tuyến amidan, thường do vi khuẩn streptococcus",
        "Cần đi khám để được kê kháng sinh nếu do vi khuẩn",
    ),
    (
        "Viêm phổi",
        "Nhiễm trùng phổi nghiêm trọng",
        "Cần đi khám ngay, có thể cần nhập viện điều trị",
    ),
    (
        "Viêm phế quản",
        "Viêm đường dẫn khí phế quản",
        "Nghỉ ngơi, uống nhiều nước, tránh khói bụi",
    ),
    (
        "Sốt xuất huyết",
        "Bệnh do virus dengue qua muỗi vằn",
        "Cần đi khám ngay, theo dõi số lượng tiểu cầu",
    ),
    (
        "Sốt rét",
        "Bệnh nhiễm ký sinh trùng plasmodium qua muỗi anopheles",
        "Cần điều trị thuốc chống sốt rét ngay",
    ),
    (
        "Viêm gan A",
        "Nhiễm virus viêm gan A, lây qua đường tiêu hóa",
        "Nghỉ ngơi, ăn nhẹ, tránh rượu bia, đi khám để theo dõi",
    ),
    (
        "Viêm gan B",
        "Nhiễm virus viêm gan B, lây qua máu và dịch cơ thể",
        "Cần điều trị dài hạn, theo dõi chức năng gan định kỳ",
    ),
    (
        "Tiêu chảy",
        "Rối loạn tiêu hóa với phân lỏng",
        "Bù nước điện giải, ăn nhẹ, đi khám nếu kéo dài hoặc có máu",
    ),
    (
        "Nhiễm khuẩn đường ruột",
        "Nhiễm trùng đường tiêu hóa do vi khuẩn",
        "Bù nước, vệ sinh thực phẩm, đi khám để được kê kháng sinh",
    ),
    (
        "Viêm dạ dày",
        "Viêm niêm mạc dạ dày",
        "Ăn uống điều độ, tránh cay nóng, căng thẳng",
    ),
    (
        "Loét dạ dày",
        "Tổn thương niêm mạc dạ dày tạo vết loét",
        "Cần điều trị thuốc, thay đổi chế độ ăn uống",
    ),
    (
        "Viêm ruột thừa",
        "Viêm ruột thừa, có thể vỡ gây nguy hiểm",
        "Cần đi cấp cứu ngay, có thể phải phẫu thuật",
    ),
    (
        "Sỏi mật",
        "Sỏi trong túi mật hoặc đường mật",
        "Đi khám để đánh giá, có thể cần phẫu thuật",
    ),
    (
        "Viêm đường tiết niệu",
        "Nhiễm trùng đường tiết niệu",
        "Uống nhiều nước, đi khám để được kê kháng sinh",
    ),
    (
        "Sỏi thận",
        "Sỏi trong thận hoặc đường tiết niệu",
        "Uống nhiều nước, giảm đau, đi khám để xử lý sỏi",
    ),
    (
        "Tiểu đường",
        "Rối loạn chuyển hóa đường trong máu",
        "Cần điều trị dài hạn, kiểm soát đường huyết",
    ),
    (
        "Huyết áp cao",
        "Tăng huyết áp động mạch",
        "Theo dõi huyết áp, điều chỉnh lối sống, dùng thuốc theo chỉ định",
    ),
    (
        "Thiếu máu",
        "Giảm hồng cầu hoặc hemoglobin trong máu",
        "Bổ sung sắt, vitamin, tìm nguyên nhân",
    ),
    (
        "Viêm khớp",
        "Viêm các khớp trong cơ thể",
        "Giảm đau, vật lý trị liệu, tránh vận động quá sức",
    ),
    (
        "Gout",
        "Viêm khớp do lắng đọng acid uric",
        "Hạn chế đạm động vật, rượu bia, dùng thuốc hạ acid uric",
    ),
    (
        "Viêm da",
        "Viêm nhiễm da do nhiều nguyên nhân",
        "Giữ vệ sinh da, tránh gạch, đi khám da liễu",
    ),
    (
        "Dị ứng da",
        "Phản ứng dị ứng trên da",
        "Tìm và tránh tác nhân dị ứng, dùng thuốc kháng histamine",
    ),
    (
        "Zona",
        "Bệnh do virus herpes zoster tái hoạt",
        "Cần điều trị thuốc kháng virus sớm, giảm đau",
    ),
    (
        "Thủy đậu",
        "Bệnh nhiễm virus varicella-zoster",
        "Cách ly, giảm ngứa, tránh gãi, uống nhiều nước",
    ),
    (
        "Quai bị",
        "Bệnh nhiễm virus mumps",
        "Nghỉ ngơi, ăn mềm, chườm ấm vùng sưng",
    ),
    (
        "Sởi",
        "Bệnh nhiễm virus sởi, lây lan nhanh",
        "Cách ly, nghỉ ngơi, theo dõi biến chứng",
    ),
    (
        "Rubella",
        "Bệnh rubella (sởi Đức)",
        "Nghỉ ngơi, cách ly, đặc biệt nguy hiểm với phụ nữ mang thai",
    ),
    (
        "Tay chân miệng",
        "Bệnh do virus Coxsackie, thường gặp ở trẻ em",
        "Giữ vệ sinh, ăn mềm mát, theo dõi sốt cao",
    ),
    (
        "Viêm màng não",
        "Viêm màng bao não, rất nguy hiểm",
        "Cấp cứu ngay lập tức, cần điều trị tích cực",
    ),
    (
        "COVID-19",
        "Bệnh nhiễm virus SARS-CoV-2",
        "Cách ly, theo dõi SpO2, đi khám nếu khó thở",
    ),
    (
        "Viêm xoang",
        "Viêm niêm mạc xoang mũi",
        "Xông mũi, súc rửa mũi nước muối, thuốc kháng sinh nếu cần",
    ),
    (
        "Hen phế quản",
        "Bệnh hen suyễn mạn tính",
        "Tránh tác nhân kích ứng, dùng thuốc theo chỉ định",
    ),
    (
        "Lao phổi",
        "Nhiễm vi khuẩn lao Mycobacterium tuberculosis",
        "Cần điều trị kháng sinh đặc hiệu kéo dài 6-9 tháng",
    ),
    (
        "Viêm màng phổi",
        "Viêm màng bao phổi",
        "Cần điều trị nguyên nhân, giảm đau, theo dõi",
    ),
    (
        "Rối loạn tiêu hóa",
        "Các triệu chứng tiêu hóa không đặc hiệu",
        "Điều chỉnh chế độ ăn, giảm stress, đi khám nếu kéo dài",
    ),
    (
        "Trĩ",
        "Giãn tĩnh mạch vùng hậu môn",
        "Ăn nhiều chất xơ, vệ sinh sạch sẽ, tránh ngồi lâu",
    ),
    (
        "Táo bón",
        "Khó đại tiện, phân cứng",
        "Ăn nhiều rau xanh, uống nhiều nước, vận động",
    ),
    (
        "Rối loạn lo âu",
        "Rối loạn tâm lý với lo âu quá mức",
        "Tham vấn tâm lý, thư giãn, có thể cần thuốc",
    ),
];

static DISEASE_TABLE: LazyLock<HashMap<&'static str, DiseaseInfo>> = LazyLock::new(|| {
    DISEASES
        .iter()
        .map(|&(name, description, advice)| (name, DiseaseInfo { description, advice }))
        .collect()
});
