//! Literal fixture dimensions, modeled as constant tables.
//!
//! These rows are reproduced verbatim from the clinic chain's reference
//! data; fact builders look prices, coverage, and fees up here.

use crate::tables::{Branch, BranchSize, Doctor, Insurance, PaymentMethod, Service, ServiceCategory};

pub const BRANCHES: [Branch; 8] = [
    Branch {
        branch_id: 1,
        branch_code: "BKK-CTW",
        branch_name: "คลินิกเซ็นทรัลเวิลด์",
        region: "กรุงเทพฯ",
        province: "กรุงเทพมหานคร",
        district: "ปทุมวัน",
        size: BranchSize::Large,
        open_date: "2020-01-15",
        square_meter: 450,
        num_rooms: 8,
        monthly_rent: 280000,
        is_active: 1,
    },
    Branch {
        branch_id: 2,
        branch_code: "BKK-SKM",
        branch_name: "คลินิกสุขุมวิท",
        region: "กรุงเทพฯ",
        province: "กรุงเทพมหานคร",
        district: "วัฒนา",
        size: BranchSize::Large,
        open_date: "2020-06-01",
        square_meter: 380,
        num_rooms: 7,
        monthly_rent: 250000,
        is_active: 1,
    },
    Branch {
        branch_id: 3,
        branch_code: "BKK-STW",
        branch_name: "คลินิกสาทร",
        region: "กรุงเทพฯ",
        province: "กรุงเทพมหานคร",
        district: "สาทร",
        size: BranchSize::Medium,
        open_date: "2021-03-20",
        square_meter: 280,
        num_rooms: 5,
        monthly_rent: 180000,
        is_active: 1,
    },
    Branch {
        branch_id: 4,
        branch_code: "CMI-NMM",
        branch_name: "คลินิกนิมมาน",
        region: "ภาคเหนือ",
        province: "เชียงใหม่",
        district: "เมือง",
        size: BranchSize::Medium,
        open_date: "2021-08-15",
        square_meter: 300,
        num_rooms: 6,
        monthly_rent: 120000,
        is_active: 1,
    },
    Branch {
        branch_id: 5,
        branch_code: "PKT-PTL",
        branch_name: "คลินิกภูเก็ต",
        region: "ภาคใต้",
        province: "ภูเก็ต",
        district: "กะทู้",
        size: BranchSize::Medium,
        open_date: "2022-01-10",
        square_meter: 320,
        num_rooms: 6,
        monthly_rent: 140000,
        is_active: 1,
    },
    Branch {
        branch_id: 6,
        branch_code: "HDY-CTR",
        branch_name: "คลินิกหาดใหญ่",
        region: "ภาคใต้",
        province: "สงขลา",
        district: "หาดใหญ่",
        size: BranchSize::Small,
        open_date: "2022-09-01",
        square_meter: 200,
        num_rooms: 4,
        monthly_rent: 70000,
        is_active: 1,
    },
    Branch {
        branch_id: 7,
        branch_code: "KKN-CTR",
        branch_name: "คลินิกขอนแก่น",
        region: "ภาคอีสาน",
        province: "ขอนแก่น",
        district: "เมือง",
        size: BranchSize::Medium,
        open_date: "2023-02-15",
        square_meter: 260,
        num_rooms: 5,
        monthly_rent: 85000,
        is_active: 1,
    },
    Branch {
        branch_id: 8,
        branch_code: "CHB-CTR",
        branch_name: "คลินิกชลบุรี",
        region: "ภาคตะวันออก",
        province: "ชลบุรี",
        district: "เมือง",
        size: BranchSize::Small,
        open_date: "2023-07-01",
        square_meter: 220,
        num_rooms: 4,
        monthly_rent: 75000,
        is_active: 1,
    },
];

pub const SERVICES: [Service; 18] = [
    Service {
        service_id: 1,
        service_code: "Z00.0",
        service_name: "ตรวจสุขภาพทั่วไป",
        icd10_description: "General medical examination",
        category: ServiceCategory::GeneralMedicine,
        sub_category: "Consultation",
        base_price: 500.0,
        cost: 150.0,
        duration: 30,
    },
    Service {
        service_id: 2,
        service_code: "R50.9",
        service_name: "ตรวจรักษาโรคทั่วไป",
        icd10_description: "Fever, unspecified",
        category: ServiceCategory::GeneralMedicine,
        sub_category: "Treatment",
        base_price: 800.0,
        cost: 250.0,
        duration: 45,
    },
    Service {
        service_id: 3,
        service_code: "L98.9",
        service_name: "ตรวจผิวหนัง",
        icd10_description: "Disorder of skin and subcutaneous tissue",
        category: ServiceCategory::Dermatology,
        sub_category: "Consultation",
        base_price: 1000.0,
        cost: 300.0,
        duration: 30,
    },
    Service {
        service_id: 4,
        service_code: "L70.0",
        service_name: "รักษาสิว",
        icd10_description: "Acne vulgaris",
        category: ServiceCategory::Dermatology,
        sub_category: "Treatment",
        base_price: 2500.0,
        cost: 800.0,
        duration: 60,
    },
    Service {
        service_id: 5,
        service_code: "L81.9",
        service_name: "เลเซอร์หน้าใส",
        icd10_description: "Disorder of pigmentation",
        category: ServiceCategory::Dermatology,
        sub_category: "Aesthetic",
        base_price: 5000.0,
        cost: 1500.0,
        duration: 90,
    },
    Service {
        service_id: 6,
        service_code: "Z01.2",
        service_name: "ตรวจฟัน",
        icd10_description: "Dental examination",
        category: ServiceCategory::Dental,
        sub_category: "Consultation",
        base_price: 300.0,
        cost: 100.0,
        duration: 30,
    },
    Service {
        service_id: 7,
        service_code: "K02.9",
        service_name: "อุดฟัน",
        icd10_description: "Dental caries",
        category: ServiceCategory::Dental,
        sub_category: "Treatment",
        base_price: 1500.0,
        cost: 500.0,
        duration: 60,
    },
    Service {
        service_id: 8,
        service_code: "K03.6",
        service_name: "ขูดหินปูน",
        icd10_description: "Deposits on teeth",
        category: ServiceCategory::Dental,
        sub_category: "Treatment",
        base_price: 1200.0,
        cost: 400.0,
        duration: 45,
    },
    Service {
        service_id: 9,
        service_code: "K03.7",
        service_name: "ฟอกสีฟัน",
        icd10_description: "Posteruptive color changes of dental hard tissues",
        category: ServiceCategory::Dental,
        sub_category: "Aesthetic",
        base_price: 8000.0,
        cost: 2500.0,
        duration: 120,
    },
    Service {
        service_id: 10,
        service_code: "M25.9",
        service_name: "ตรวจกระดูกและข้อ",
        icd10_description: "Joint disorder, unspecified",
        category: ServiceCategory::Orthopedics,
        sub_category: "Consultation",
        base_price: 1200.0,
        cost: 350.0,
        duration: 30,
    },
    Service {
        service_id: 11,
        service_code: "M79.3",
        service_name: "กายภาพบำบัด",
        icd10_description: "Panniculitis, unspecified (for physiotherapy)",
        category: ServiceCategory::Orthopedics,
        sub_category: "Treatment",
        base_price: 1800.0,
        cost: 600.0,
        duration: 60,
    },
    Service {
        service_id: 12,
        service_code: "Z00.00",
        service_name: "เจาะเลือดตรวจสุขภาพ",
        icd10_description: "General medical examination without complaint",
        category: ServiceCategory::Laboratory,
        sub_category: "Blood Test",
        base_price: 1500.0,
        cost: 400.0,
        duration: 15,
    },
    Service {
        service_id: 13,
        service_code: "R82.90",
        service_name: "ตรวจปัสสาวะ",
        icd10_description: "Unspecified abnormal findings in urine",
        category: ServiceCategory::Laboratory,
        sub_category: "Urine Test",
        base_price: 300.0,
        cost: 80.0,
        duration: 10,
    },
    Service {
        service_id: 14,
        service_code: "Z01.6",
        service_name: "X-Ray",
        icd10_description: "Radiological examination",
        category: ServiceCategory::Laboratory,
        sub_category: "Imaging",
        base_price: 800.0,
        cost: 250.0,
        duration: 20,
    },
    Service {
        service_id: 15,
        service_code: "Z25.1",
        service_name: "วัคซีนไข้หวัดใหญ่",
        icd10_description: "Need for immunization against influenza",
        category: ServiceCategory::Vaccination,
        sub_category: "Flu",
        base_price: 600.0,
        cost: 350.0,
        duration: 15,
    },
    Service {
        service_id: 16,
        service_code: "Z28.3",
        service_name: "วัคซีนโควิด-19",
        icd10_description: "Underimmunization status (COVID-19)",
        category: ServiceCategory::Vaccination,
        sub_category: "COVID-19",
        base_price: 0.0,
        cost: 0.0,
        duration: 15,
    },
    Service {
        service_id: 17,
        service_code: "Z00.01",
        service_name: "แพ็คเกจตรวจสุขภาพพื้นฐาน",
        icd10_description: "General medical examination with abnormal findings",
        category: ServiceCategory::HealthPackage,
        sub_category: "Basic",
        base_price: 3500.0,
        cost: 1200.0,
        duration: 90,
    },
    Service {
        service_id: 18,
        service_code: "Z13.9",
        service_name: "แพ็คเกจตรวจสุขภาพแบบครอบคลุม",
        icd10_description: "Special screening examination, unspecified",
        category: ServiceCategory::HealthPackage,
        sub_category: "Comprehensive",
        base_price: 8500.0,
        cost: 3000.0,
        duration: 180,
    },
];

pub const DOCTORS: [Doctor; 10] = [
    Doctor {
        doctor_id: 1,
        doctor_code: "DR001",
        doctor_name: "นพ.สมชาย ใจดี",
        specialty: "General Medicine",
        license_number: "MD12345",
        years_of_experience: 15,
        education_level: "MD",
        hourly_rate: 1500,
        status: "Active",
        hire_date: "2020-01-15",
    },
    Doctor {
        doctor_id: 2,
        doctor_code: "DR002",
        doctor_name: "นพ.วิชัย รักษา",
        specialty: "Dermatology",
        license_number: "MD12346",
        years_of_experience: 12,
        education_level: "MD, Board Certified",
        hourly_rate: 2000,
        status: "Active",
        hire_date: "2020-02-01",
    },
    Doctor {
        doctor_id: 3,
        doctor_code: "DR003",
        doctor_name: "ทพญ.สุดา สวยงาม",
        specialty: "Dermatology",
        license_number: "MD12347",
        years_of_experience: 10,
        education_level: "MD, Board Certified",
        hourly_rate: 2000,
        status: "Active",
        hire_date: "2020-03-15",
    },
    Doctor {
        doctor_id: 4,
        doctor_code: "DR004",
        doctor_name: "ทพ.ชัยวัฒน์ ยิ้มแย้ม",
        specialty: "Dental",
        license_number: "DT12348",
        years_of_experience: 8,
        education_level: "DDS",
        hourly_rate: 1800,
        status: "Active",
        hire_date: "2020-06-01",
    },
    Doctor {
        doctor_id: 5,
        doctor_code: "DR005",
        doctor_name: "ทพญ.มาลี รอยยิ้ม",
        specialty: "Dental",
        license_number: "DT12349",
        years_of_experience: 6,
        education_level: "DDS",
        hourly_rate: 1600,
        status: "Active",
        hire_date: "2021-01-15",
    },
    Doctor {
        doctor_id: 6,
        doctor_code: "DR006",
        doctor_name: "นพ.ประเสริฐ แข็งแรง",
        specialty: "Orthopedics",
        license_number: "MD12350",
        years_of_experience: 14,
        education_level: "MD, Board Certified",
        hourly_rate: 2200,
        status: "Active",
        hire_date: "2021-03-01",
    },
    Doctor {
        doctor_id: 7,
        doctor_code: "DR007",
        doctor_name: "นพ.อนุชา เจริญ",
        specialty: "General Medicine",
        license_number: "MD12351",
        years_of_experience: 9,
        education_level: "MD",
        hourly_rate: 1400,
        status: "Active",
        hire_date: "2021-08-01",
    },
    Doctor {
        doctor_id: 8,
        doctor_code: "DR008",
        doctor_name: "ทพญ.ศิริพร สุขสม",
        specialty: "General Medicine",
        license_number: "MD12352",
        years_of_experience: 7,
        education_level: "MD",
        hourly_rate: 1300,
        status: "Active",
        hire_date: "2022-01-15",
    },
    Doctor {
        doctor_id: 9,
        doctor_code: "DR009",
        doctor_name: "ทพ.สมศักดิ์ สุดหล่อ",
        specialty: "Dental",
        license_number: "DT12353",
        years_of_experience: 5,
        education_level: "DDS",
        hourly_rate: 1500,
        status: "Active",
        hire_date: "2022-09-01",
    },
    Doctor {
        doctor_id: 10,
        doctor_code: "DR010",
        doctor_name: "นพ.ธนา มั่งมี",
        specialty: "Dermatology",
        license_number: "MD12354",
        years_of_experience: 11,
        education_level: "MD, Board Certified",
        hourly_rate: 2100,
        status: "Active",
        hire_date: "2023-02-01",
    },
];

pub const PAYMENT_METHODS: [PaymentMethod; 8] = [
    PaymentMethod {
        payment_method_id: 1,
        payment_method_code: "CASH",
        payment_method_name: "เงินสด",
        category: "Cash",
        is_active: 1,
        processing_fee: 0.0,
    },
    PaymentMethod {
        payment_method_id: 2,
        payment_method_code: "CC-VISA",
        payment_method_name: "บัตรเครดิต Visa",
        category: "Credit Card",
        is_active: 1,
        processing_fee: 2.5,
    },
    PaymentMethod {
        payment_method_id: 3,
        payment_method_code: "CC-MC",
        payment_method_name: "บัตรเครดิต MasterCard",
        category: "Credit Card",
        is_active: 1,
        processing_fee: 2.5,
    },
    PaymentMethod {
        payment_method_id: 4,
        payment_method_code: "DEBIT",
        payment_method_name: "บัตรเดบิต",
        category: "Debit Card",
        is_active: 1,
        processing_fee: 1.5,
    },
    PaymentMethod {
        payment_method_id: 5,
        payment_method_code: "BANK-TRF",
        payment_method_name: "โอนเงินผ่านธนาคาร",
        category: "Bank Transfer",
        is_active: 1,
        processing_fee: 0.0,
    },
    PaymentMethod {
        payment_method_id: 6,
        payment_method_code: "PROMPTPAY",
        payment_method_name: "พร้อมเพย์",
        category: "E-Wallet",
        is_active: 1,
        processing_fee: 0.0,
    },
    PaymentMethod {
        payment_method_id: 7,
        payment_method_code: "TRUEMONEY",
        payment_method_name: "ทรูมันนี่วอลเล็ท",
        category: "E-Wallet",
        is_active: 1,
        processing_fee: 1.0,
    },
    PaymentMethod {
        payment_method_id: 8,
        payment_method_code: "INSTALLMENT",
        payment_method_name: "ผ่อนชำระ 0%",
        category: "Installment",
        is_active: 1,
        processing_fee: 3.5,
    },
];

pub const INSURANCES: [Insurance; 6] = [
    Insurance {
        insurance_id: 1,
        insurance_code: "SELF",
        insurance_name: "ไม่มีประกัน (จ่ายเอง)",
        company_name: "Self Pay",
        coverage_percent: 0.0,
        is_active: 1,
    },
    Insurance {
        insurance_id: 2,
        insurance_code: "SSO",
        insurance_name: "ประกันสังคม",
        company_name: "Social Security Office",
        coverage_percent: 100.0,
        is_active: 1,
    },
    Insurance {
        insurance_id: 3,
        insurance_code: "AIA-001",
        insurance_name: "AIA Health Plus",
        company_name: "AIA Thailand",
        coverage_percent: 80.0,
        is_active: 1,
    },
    Insurance {
        insurance_id: 4,
        insurance_code: "ALLIANZ-001",
        insurance_name: "Allianz SmartHealth",
        company_name: "Allianz Ayudhya",
        coverage_percent: 90.0,
        is_active: 1,
    },
    Insurance {
        insurance_id: 5,
        insurance_code: "BUPA-001",
        insurance_name: "Bupa Premium",
        company_name: "Bupa Thailand",
        coverage_percent: 100.0,
        is_active: 1,
    },
    Insurance {
        insurance_id: 6,
        insurance_code: "DHIPAYA-001",
        insurance_name: "ธนชาต ประกันสุขภาพ",
        company_name: "Dhipaya Insurance",
        coverage_percent: 70.0,
        is_active: 1,
    },
];
