mod activation_service;
